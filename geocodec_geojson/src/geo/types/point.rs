use super::{Coordinates, GeometryTrait};
use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Represents a single geographic or geometric point defined by x and y
/// coordinates.
///
/// This is the simplest geometric type and is often used as a building block
/// for more complex geometries.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	/// Returns the x component of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	/// Returns the y component of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Always succeeds because a point is always valid.
	fn verify(&self) -> Result<(), DecodeError> {
		Ok(())
	}

	/// Returns the point as a JSON array `[x, y]`.
	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into
	/// `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
