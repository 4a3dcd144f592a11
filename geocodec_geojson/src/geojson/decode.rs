//! Decoding generic JSON values into the typed GeoJSON domain model.
//!
//! Decoding is a pure, depth-first, left-to-right traversal that fails fast:
//! the first structural violation aborts the whole decode. Members this codec
//! does not know (e.g. `bbox`) are ignored.

use crate::{
	Coordinates, DecodeError, GeoCollection, GeoFeature, GeoIdentifier, GeoJson, GeoProperties, Geometry,
	LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, RingGeometry,
};
use geocodec_core::json::{JsonArray, JsonObject, JsonValue};
use log::trace;

/// Upper bound on `GeometryCollection` nesting. Decoding fails closed with
/// [`DecodeError::RecursionLimit`] past this depth instead of risking a stack
/// overflow on adversarial input. Coordinate nesting needs no bound since its
/// depth is fixed per geometry kind.
pub const MAX_GEOMETRY_DEPTH: usize = 256;

/// Decodes any GeoJSON document: a bare geometry, a feature, or a feature
/// collection, selected by the `type` member. A JSON `null` decodes to the
/// empty geometry.
pub fn decode_geojson(value: &JsonValue) -> Result<GeoJson, DecodeError> {
	if value.is_null() {
		return Ok(GeoJson::Geometry(Geometry::Empty));
	}
	let object = expect_object(value, "GeoJSON must be an object")?;
	let type_name = expect_type(object, "GeoJSON must have a 'type' member")?;

	match type_name {
		"FeatureCollection" => decode_collection(value).map(GeoJson::FeatureCollection),
		"Feature" => decode_feature(value).map(GeoJson::Feature),
		_ => decode_geometry(value).map(GeoJson::Geometry),
	}
}

/// Decodes a `FeatureCollection` object.
pub fn decode_collection(value: &JsonValue) -> Result<GeoCollection, DecodeError> {
	let object = expect_object(value, "FeatureCollection must be an object")?;
	let type_name = expect_type(object, "FeatureCollection must have a 'type' member")?;
	if type_name != "FeatureCollection" {
		return Err(DecodeError::unknown_discriminator(format!(
			"expected type 'FeatureCollection', found '{type_name}'"
		)));
	}

	let features = expect_member_array(object, "features", "FeatureCollection")?;
	let features = features.iter().map(decode_feature).collect::<Result<Vec<_>, _>>()?;

	Ok(GeoCollection { features })
}

/// Decodes a `Feature` object.
///
/// A JSON `null` geometry decodes to [`Geometry::Empty`]; a missing or null
/// `properties` member decodes to an empty mapping, and property values are
/// carried verbatim.
pub fn decode_feature(value: &JsonValue) -> Result<GeoFeature, DecodeError> {
	let object = expect_object(value, "Feature must be an object")?;
	let type_name = expect_type(object, "Feature must have a 'type' member")?;
	if type_name != "Feature" {
		return Err(DecodeError::unknown_discriminator(format!(
			"expected type 'Feature', found '{type_name}'"
		)));
	}

	let geometry = object
		.get("geometry")
		.ok_or_else(|| DecodeError::missing_member("Feature must have a 'geometry' member"))?;
	let geometry = decode_geometry(geometry)?;

	let id = match object.get("id") {
		None => None,
		Some(value) => Some(decode_identifier(value)?),
	};

	let properties = match object.get("properties") {
		None | Some(JsonValue::Null) => GeoProperties::new(),
		Some(JsonValue::Object(properties)) => {
			GeoProperties::from_iter(properties.iter().map(|(key, value)| (key.clone(), value.clone())))
		}
		Some(_) => return Err(DecodeError::wrong_type("'properties' member must be an object")),
	};

	for key in object.keys() {
		if !matches!(key.as_str(), "type" | "geometry" | "id" | "properties") {
			trace!("ignoring foreign member '{key}' in Feature");
		}
	}

	Ok(GeoFeature { id, geometry, properties })
}

/// Decodes a geometry object of any kind. A JSON `null` decodes to
/// [`Geometry::Empty`].
pub fn decode_geometry(value: &JsonValue) -> Result<Geometry, DecodeError> {
	decode_geometry_at(value, 0)
}

fn decode_geometry_at(value: &JsonValue, depth: usize) -> Result<Geometry, DecodeError> {
	if depth > MAX_GEOMETRY_DEPTH {
		return Err(DecodeError::RecursionLimit(MAX_GEOMETRY_DEPTH));
	}
	if value.is_null() {
		return Ok(Geometry::Empty);
	}

	let object = expect_object(value, "geometry must be an object")?;
	let type_name = expect_type(object, "geometry must have a 'type' member")?;

	for key in object.keys() {
		if !matches!(key.as_str(), "type" | "coordinates" | "geometries") {
			trace!("ignoring foreign member '{key}' in {type_name} geometry");
		}
	}

	if type_name == "GeometryCollection" {
		let geometries = expect_member_array(object, "geometries", "GeometryCollection")?;
		let geometries = geometries
			.iter()
			.map(|geometry| decode_geometry_at(geometry, depth + 1))
			.collect::<Result<Vec<_>, _>>()?;
		return Ok(Geometry::GeometryCollection(geometries));
	}

	let coordinates = object.get("coordinates").ok_or_else(|| {
		DecodeError::missing_member(format!("{type_name} geometry must have a 'coordinates' member"))
	})?;

	let geometry = match type_name {
		"Point" => Geometry::Point(PointGeometry(decode_position(coordinates)?)),
		"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(decode_sequence(coordinates, |value| {
			decode_position(value).map(PointGeometry)
		})?)),
		"LineString" => Geometry::LineString(LineStringGeometry(decode_sequence(coordinates, decode_position)?)),
		"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(decode_sequence(
			coordinates,
			decode_line_string,
		)?)),
		"Polygon" => Geometry::Polygon(PolygonGeometry(decode_sequence(coordinates, decode_ring)?)),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(decode_sequence(coordinates, |value| {
			decode_sequence(value, decode_ring).map(PolygonGeometry)
		})?)),
		_ => {
			return Err(DecodeError::unknown_discriminator(format!(
				"{type_name} not yet implemented"
			)));
		}
	};

	geometry.verify()?;
	Ok(geometry)
}

fn decode_identifier(value: &JsonValue) -> Result<GeoIdentifier, DecodeError> {
	match value {
		JsonValue::String(text) => Ok(GeoIdentifier::String(text.clone())),
		JsonValue::Int(number) => Ok(GeoIdentifier::Int(*number)),
		JsonValue::UInt(number) => Ok(GeoIdentifier::UInt(*number)),
		JsonValue::Double(number) => Ok(GeoIdentifier::Double(*number)),
		_ => Err(DecodeError::wrong_type("Feature 'id' must be a string or a number")),
	}
}

/// Decodes a single position from an array of at least two numbers. Extra
/// elements (e.g. elevation) are ignored.
fn decode_position(value: &JsonValue) -> Result<Coordinates, DecodeError> {
	let array = expect_array(value)?;
	if array.len() < 2 {
		return Err(DecodeError::arity_violation("position must have at least 2 numbers"));
	}

	let elements = array.as_slice();
	Ok(Coordinates::new(
		coordinate_number(&elements[0])?,
		coordinate_number(&elements[1])?,
	))
}

fn decode_line_string(value: &JsonValue) -> Result<LineStringGeometry, DecodeError> {
	decode_sequence(value, decode_position).map(LineStringGeometry)
}

fn decode_ring(value: &JsonValue) -> Result<RingGeometry, DecodeError> {
	decode_sequence(value, decode_position).map(RingGeometry)
}

/// Maps `decode_item` over a required array value, propagating the first
/// element error (depth-first, left-to-right).
fn decode_sequence<T>(
	value: &JsonValue,
	decode_item: impl Fn(&JsonValue) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
	expect_array(value)?.iter().map(decode_item).collect()
}

fn coordinate_number(value: &JsonValue) -> Result<f64, DecodeError> {
	match value {
		JsonValue::Double(number) => Ok(*number),
		JsonValue::Int(number) => Ok(*number as f64),
		JsonValue::UInt(number) => Ok(*number as f64),
		_ => Err(DecodeError::wrong_type("coordinate value must be a number")),
	}
}

fn expect_array(value: &JsonValue) -> Result<&JsonArray, DecodeError> {
	match value {
		JsonValue::Array(array) => Ok(array),
		_ => Err(DecodeError::wrong_type("coordinates must be an array")),
	}
}

fn expect_object<'a>(value: &'a JsonValue, msg: &str) -> Result<&'a JsonObject, DecodeError> {
	match value {
		JsonValue::Object(object) => Ok(object),
		_ => Err(DecodeError::wrong_type(msg)),
	}
}

fn expect_type<'a>(object: &'a JsonObject, missing_msg: &str) -> Result<&'a str, DecodeError> {
	match object.get("type") {
		None => Err(DecodeError::missing_member(missing_msg)),
		Some(JsonValue::String(text)) => Ok(text),
		Some(_) => Err(DecodeError::wrong_type("'type' member must be a string")),
	}
}

fn expect_member_array<'a>(object: &'a JsonObject, key: &str, owner: &str) -> Result<&'a JsonArray, DecodeError> {
	match object.get(key) {
		None => Err(DecodeError::missing_member(format!(
			"{owner} must have a '{key}' member"
		))),
		Some(JsonValue::Array(array)) => Ok(array),
		Some(_) => Err(DecodeError::wrong_type(format!("'{key}' member must be an array"))),
	}
}
