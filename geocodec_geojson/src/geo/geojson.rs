use super::{GeoCollection, GeoFeature, Geometry};

/// Any GeoJSON document: a bare geometry, a feature, or a feature collection.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJson {
	/// Returns the GeoJSON `type` string of this document.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			GeoJson::Geometry(geometry) => geometry.type_name(),
			GeoJson::Feature(_) => "Feature",
			GeoJson::FeatureCollection(_) => "FeatureCollection",
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(geometry: Geometry) -> Self {
		GeoJson::Geometry(geometry)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(feature: GeoFeature) -> Self {
		GeoJson::Feature(feature)
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(collection: GeoCollection) -> Self {
		GeoJson::FeatureCollection(collection)
	}
}
