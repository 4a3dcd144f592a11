//! JSON object type and utilities for serializing, deserializing, and converting JSON to Rust types.

use crate::json::*;
use anyhow::Result;
use indexmap::IndexMap;
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// A JSON object backed by a shared `Arc<IndexMap<String, JsonValue>>` payload.
///
/// Member order is insertion order, both when parsing and when serializing.
/// Cloning a `JsonObject` shares the payload; mutation through
/// [`set`](Self::set) is copy-on-write.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(Arc<IndexMap<String, JsonValue>>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Return the number of members.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Return `true` if the object contains no members.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Return `true` if the object contains the specified key.
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Set the specified key to the given value, converting it into a `JsonValue`.
	///
	/// Copies the payload first if it is shared.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		Arc::make_mut(&mut self.0).insert(key.to_owned(), JsonValue::from(value));
	}

	/// Serialize this `JsonObject` into a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Parse a JSON string into a `JsonObject`, returning an error on invalid JSON or non-object root.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Return an iterator over key-value pairs in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	/// Return an iterator over keys in insertion order.
	pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonValue> {
		self.0.keys()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
		JsonObject(Arc::new(IndexMap::from_iter(iter)))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object` by converting into a `JsonObject`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`, consuming the vector of key-value pairs.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject::from_iter(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value))),
		)
	}
}
