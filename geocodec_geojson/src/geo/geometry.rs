use super::*;
use crate::DecodeError;
use std::fmt::Debug;

/// A geometry of any GeoJSON kind.
///
/// `Empty` is the degenerate case representing a JSON `null` geometry, and
/// `GeometryCollection` holds an ordered sequence of further geometries.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Empty,
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(&value))
	}

	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(&value))
	}

	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(&value))
	}

	pub fn new_multi_point<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(&value))
	}

	pub fn new_multi_line_string<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(&value))
	}

	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(&value))
	}

	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(geometries)
	}

	/// Returns the GeoJSON `type` string of this geometry.
	///
	/// `Empty` has no `type` string of its own (it encodes to JSON `null`)
	/// and reports `"Empty"`.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			Geometry::Empty => "Empty",
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	/// Verifies the arity invariants of this geometry and, recursively, of
	/// every member of a `GeometryCollection`.
	pub fn verify(&self) -> Result<(), DecodeError> {
		match self {
			Geometry::Empty | Geometry::Point(_) => Ok(()),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(geometries) => {
				for geometry in geometries {
					geometry.verify()?;
				}
				Ok(())
			}
		}
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Empty => return f.debug_tuple("Empty").finish(),
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
