use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a collection of independent points in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	/// Always succeeds; every point is valid on its own.
	fn verify(&self) -> Result<(), DecodeError> {
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PointGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_always_ok() {
		assert!(MultiPointGeometry::new().verify().is_ok());
		assert!(MultiPointGeometry::from(&[[1, 2], [3, 4]]).verify().is_ok());
	}

	#[test]
	fn to_coord_json() {
		let multi = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(
			multi.to_coord_json(),
			JsonValue::from(vec![JsonValue::from([1.0, 2.0]), JsonValue::from([3.0, 4.0])])
		);
	}
}
