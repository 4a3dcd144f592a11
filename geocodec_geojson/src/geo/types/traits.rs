use crate::DecodeError;
use geocodec_core::json::JsonValue;
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common
/// functionality for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry.
	/// For example, checks if there are enough points or if rings are properly
	/// closed. Returns a [`DecodeError::ArityViolation`] if the geometry is
	/// invalid.
	fn verify(&self) -> Result<(), DecodeError>;

	/// Converts the geometry into a JSON representation of its coordinates.
	fn to_coord_json(&self) -> JsonValue;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of
/// lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
