//! Encoding the typed GeoJSON domain model back into generic JSON values.
//!
//! Encoding is total: the domain model's invariants guarantee a well-formed
//! result, so no error path exists in this direction.

use crate::{GeoCollection, GeoFeature, GeoJson, Geometry, GeometryTrait};
use geocodec_core::json::{JsonArray, JsonObject, JsonValue};

/// Encodes any GeoJSON document.
pub fn encode_geojson(geojson: &GeoJson) -> JsonValue {
	match geojson {
		GeoJson::Geometry(geometry) => encode_geometry(geometry),
		GeoJson::Feature(feature) => encode_feature(feature),
		GeoJson::FeatureCollection(collection) => encode_collection(collection),
	}
}

/// Encodes a geometry. The empty geometry encodes to JSON `null`.
pub fn encode_geometry(geometry: &Geometry) -> JsonValue {
	match geometry {
		Geometry::Empty => JsonValue::Null,
		Geometry::Point(g) => encode_coordinates("Point", g),
		Geometry::LineString(g) => encode_coordinates("LineString", g),
		Geometry::Polygon(g) => encode_coordinates("Polygon", g),
		Geometry::MultiPoint(g) => encode_coordinates("MultiPoint", g),
		Geometry::MultiLineString(g) => encode_coordinates("MultiLineString", g),
		Geometry::MultiPolygon(g) => encode_coordinates("MultiPolygon", g),
		Geometry::GeometryCollection(geometries) => {
			let mut object = JsonObject::new();
			object.set("type", "GeometryCollection");
			object.set(
				"geometries",
				JsonValue::Array(JsonArray::from_iter(geometries.iter().map(encode_geometry))),
			);
			JsonValue::Object(object)
		}
	}
}

/// Encodes a feature. The `id` member is only present when the feature
/// carries an identifier; its numeric representation is preserved.
pub fn encode_feature(feature: &GeoFeature) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", "Feature");
	object.set("geometry", encode_geometry(&feature.geometry));
	object.set("properties", feature.properties.to_json());
	if let Some(id) = &feature.id {
		object.set("id", id.to_json());
	}
	JsonValue::Object(object)
}

/// Encodes a feature collection, preserving feature order.
pub fn encode_collection(collection: &GeoCollection) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", "FeatureCollection");
	object.set(
		"features",
		JsonValue::Array(JsonArray::from_iter(collection.features.iter().map(encode_feature))),
	);
	JsonValue::Object(object)
}

fn encode_coordinates(type_name: &str, geometry: &impl GeometryTrait) -> JsonValue {
	let mut object = JsonObject::new();
	object.set("type", type_name);
	object.set("coordinates", geometry.to_coord_json());
	JsonValue::Object(object)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geojson::{decode_collection, decode_feature, decode_geojson, decode_geometry};
	use crate::{GeoIdentifier, GeoProperties};
	use anyhow::Result;
	use rstest::rstest;

	#[test]
	fn test_encode_empty_is_null() {
		assert_eq!(encode_geometry(&Geometry::Empty), JsonValue::Null);
	}

	#[test]
	fn test_encode_point() {
		let json = encode_geometry(&Geometry::new_point([30.5, 50.5]));
		assert_eq!(json.stringify(), r#"{"type":"Point","coordinates":[30.5,50.5]}"#);
	}

	#[test]
	fn test_encode_geometry_collection_keeps_order() {
		let geometry = Geometry::new_geometry_collection(vec![
			Geometry::new_point([100.0, 0.0]),
			Geometry::new_line_string(vec![[101.0, 0.0], [102.0, 1.0]]),
		]);
		assert_eq!(
			encode_geometry(&geometry).stringify(),
			r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[100,0]},{"type":"LineString","coordinates":[[101,0],[102,1]]}]}"#
		);
	}

	#[test]
	fn test_encode_feature_without_id() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(
			encode_feature(&feature).stringify(),
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}"#
		);
	}

	#[test]
	fn test_encode_feature_with_id_and_properties() {
		let mut feature = GeoFeature::new(Geometry::Empty);
		feature.set_id(GeoIdentifier::UInt(1234));
		feature.set_property("name".to_string(), "Nice");

		assert_eq!(
			encode_feature(&feature).stringify(),
			r#"{"type":"Feature","geometry":null,"properties":{"name":"Nice"},"id":1234}"#
		);
	}

	#[test]
	fn test_encode_collection() {
		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point([1.0, 2.0]))]);
		assert_eq!(
			encode_collection(&collection).stringify(),
			r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}]}"#
		);
	}

	#[rstest]
	#[case::point(Geometry::new_point([30.5, 50.5]))]
	#[case::multi_point(Geometry::new_multi_point(vec![[0.0, 0.0], [1.5, 1.5]]))]
	#[case::line_string(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]))]
	#[case::multi_line_string(Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]]]))]
	#[case::polygon(Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]))]
	#[case::multi_polygon(Geometry::new_example())]
	#[case::geometry_collection(Geometry::new_geometry_collection(vec![
		Geometry::new_point([1.0, 2.0]),
		Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]),
	]))]
	#[case::empty(Geometry::Empty)]
	fn test_geometry_round_trip(#[case] geometry: Geometry) -> Result<()> {
		assert_eq!(decode_geometry(&encode_geometry(&geometry))?, geometry);
		Ok(())
	}

	#[test]
	fn test_feature_round_trip() -> Result<()> {
		let mut feature = GeoFeature::new_example();
		feature.set_property(
			"nested".to_string(),
			JsonValue::from(vec![JsonValue::UInt(5), JsonValue::from(vec![("foo", "bar")])]),
		);

		assert_eq!(decode_feature(&encode_feature(&feature))?, feature);
		Ok(())
	}

	#[rstest]
	#[case::none(None)]
	#[case::uint(Some(GeoIdentifier::UInt(1234)))]
	#[case::int(Some(GeoIdentifier::Int(-1234)))]
	#[case::double(Some(GeoIdentifier::Double(0.25)))]
	#[case::string(Some(GeoIdentifier::from("abcd")))]
	fn test_identifier_round_trip(#[case] id: Option<GeoIdentifier>) -> Result<()> {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.id = id;

		assert_eq!(decode_feature(&encode_feature(&feature))?, feature);
		Ok(())
	}

	#[test]
	fn test_collection_round_trip() -> Result<()> {
		let collection = GeoCollection::from(vec![
			GeoFeature::new_example(),
			GeoFeature {
				id: None,
				geometry: Geometry::Empty,
				properties: GeoProperties::new(),
			},
		]);

		assert_eq!(decode_collection(&encode_collection(&collection))?, collection);
		Ok(())
	}

	#[test]
	fn test_geojson_round_trip() -> Result<()> {
		let documents = vec![
			GeoJson::Geometry(Geometry::new_example()),
			GeoJson::Feature(GeoFeature::new_example()),
			GeoJson::FeatureCollection(GeoCollection::from(vec![GeoFeature::new_example()])),
		];

		for document in documents {
			assert_eq!(decode_geojson(&encode_geojson(&document))?, document);
		}
		Ok(())
	}
}
