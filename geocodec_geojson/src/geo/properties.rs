use geocodec_core::json::{JsonObject, JsonValue};
use indexmap::IndexMap;
use std::fmt::Debug;

/// Feature properties: an insertion-ordered mapping from property name to a
/// generic JSON value.
///
/// Values are carried verbatim — they are never decoded into a stricter
/// schema. A feature whose source has no `properties` member, or an explicit
/// `"properties": null`, carries an empty mapping.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: IndexMap<String, JsonValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: IndexMap::new(),
		}
	}

	pub fn insert(&mut self, key: String, value: JsonValue) {
		self.properties.insert(key, value);
	}

	pub fn remove(&mut self, key: &str) {
		self.properties.shift_remove(key);
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.properties.get(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonValue> {
		self.properties.iter()
	}

	/// Encodes the properties as a JSON object, preserving entry order.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		JsonObject::from_iter(self.iter().map(|(key, value)| (key.clone(), value.clone())))
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, JsonValue);
	type IntoIter = indexmap::map::IntoIter<String, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<T> From<Vec<(&str, T)>> for GeoProperties
where
	JsonValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), JsonValue::from(v)))
				.collect(),
		}
	}
}

impl FromIterator<(String, JsonValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: IndexMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
