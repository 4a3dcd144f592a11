//! Text-level entry points: parse GeoJSON documents from JSON text and
//! stringify domain objects back to compact JSON.
//!
//! The text side is handled entirely by `geocodec_core`; these functions only
//! glue the JSON reader/writer to the decoder and encoder.

use super::{
	decode_collection, decode_feature, decode_geojson, decode_geometry, encode_collection, encode_feature,
	encode_geojson, encode_geometry,
};
use crate::{GeoCollection, GeoFeature, GeoJson, Geometry};
use anyhow::Result;
use geocodec_core::json::JsonValue;

/// Parses any GeoJSON document: a bare geometry, a feature, or a feature
/// collection.
pub fn parse_geojson(json: &str) -> Result<GeoJson> {
	let value = JsonValue::parse_str(json)?;
	Ok(decode_geojson(&value)?)
}

/// Parses a geometry of any kind.
pub fn parse_geometry(json: &str) -> Result<Geometry> {
	let value = JsonValue::parse_str(json)?;
	Ok(decode_geometry(&value)?)
}

/// Parses a single `Feature`.
pub fn parse_feature(json: &str) -> Result<GeoFeature> {
	let value = JsonValue::parse_str(json)?;
	Ok(decode_feature(&value)?)
}

/// Parses a `FeatureCollection`.
pub fn parse_feature_collection(json: &str) -> Result<GeoCollection> {
	let value = JsonValue::parse_str(json)?;
	Ok(decode_collection(&value)?)
}

/// Serializes any GeoJSON document to compact JSON text.
#[must_use]
pub fn stringify_geojson(geojson: &GeoJson) -> String {
	encode_geojson(geojson).stringify()
}

/// Serializes a geometry to compact JSON text.
#[must_use]
pub fn stringify_geometry(geometry: &Geometry) -> String {
	encode_geometry(geometry).stringify()
}

/// Serializes a feature to compact JSON text.
#[must_use]
pub fn stringify_feature(feature: &GeoFeature) -> String {
	encode_feature(feature).stringify()
}

/// Serializes a feature collection to compact JSON text.
#[must_use]
pub fn stringify_feature_collection(collection: &GeoCollection) -> String {
	encode_collection(collection).stringify()
}
