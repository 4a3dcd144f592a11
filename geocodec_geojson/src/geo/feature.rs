use super::*;
use geocodec_core::json::JsonValue;

/// A GeoJSON feature: a geometry with an optional identifier and free-form
/// properties.
///
/// A JSON `null` geometry is represented by [`Geometry::Empty`], and a
/// missing id by `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoIdentifier>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id(&mut self, id: GeoIdentifier) {
		self.id = Some(id);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		JsonValue: From<T>,
	{
		self.properties.insert(key, JsonValue::from(value));
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoIdentifier::UInt(13)),
			geometry: Geometry::new_example(),
			properties: GeoProperties::from(vec![
				("name", JsonValue::from("Nice")),
				("population", JsonValue::from(348_085)),
				("is_nice", JsonValue::from(true)),
			]),
		}
	}
}
