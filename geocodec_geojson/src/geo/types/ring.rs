use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a closed ring geometry, which is a connected series of
/// coordinates forming a loop. This structure is the building block for
/// polygons. The first and last positions must be identical to form a closed
/// shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 positions (3 unique points plus the closing point).
	/// - It is closed, i.e. the first and last positions are identical.
	fn verify(&self) -> Result<(), DecodeError> {
		if self.0.len() < 4 {
			return Err(DecodeError::arity_violation("ring must have at least 4 positions"));
		}
		if self.0.first() != self.0.last() {
			return Err(DecodeError::arity_violation("ring must be closed"));
		}
		Ok(())
	}

	/// Returns the coordinates of the ring as a JSON array of positions.
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
