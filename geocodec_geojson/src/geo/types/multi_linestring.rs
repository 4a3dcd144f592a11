use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a collection of line strings, e.g. a road network or a path
/// with interruptions.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	/// Verifies every contained line string.
	fn verify(&self) -> Result<(), DecodeError> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(
			self
				.0
				.iter()
				.map(LineStringGeometry::to_coord_json)
				.collect::<Vec<_>>(),
		)
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_propagates_line_errors() {
		let multi = MultiLineStringGeometry::from(&[[[0, 0], [1, 1]]]);
		assert!(multi.verify().is_ok());

		let invalid = MultiLineStringGeometry(vec![LineStringGeometry::from(&[[0, 0]])]);
		assert_eq!(
			invalid.verify().unwrap_err(),
			DecodeError::ArityViolation("LineString must have at least 2 positions".to_string())
		);
	}

	#[test]
	fn to_coord_json_nests_lines() {
		let multi = MultiLineStringGeometry::from(&[[[0, 0], [1, 1]]]);
		let json = multi.to_coord_json();
		assert_eq!(json.as_array().unwrap().len(), 1);
	}
}
