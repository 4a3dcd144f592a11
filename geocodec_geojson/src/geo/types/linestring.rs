use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically
/// used for polylines or paths in 2D space.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two positions.
	fn verify(&self) -> Result<(), DecodeError> {
		if self.0.len() < 2 {
			return Err(DecodeError::arity_violation("LineString must have at least 2 positions"));
		}
		Ok(())
	}

	/// Converts the line's coordinates into a JSON array of positions.
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
