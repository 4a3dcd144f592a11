use super::GeoFeature;
use crate::geojson::parse_feature_collection;
use anyhow::Result;

/// An ordered collection of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// Parses a GeoJSON `FeatureCollection` document.
	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_feature_collection(json_str)
	}
}
