//! JSON array type and utilities for serializing, deserializing, and converting to Rust types.

use crate::json::*;
use anyhow::{Result, anyhow};
use std::fmt::Debug;
use std::sync::Arc;

/// A JSON array backed by a shared `Arc<Vec<JsonValue>>` payload.
///
/// Cloning a `JsonArray` shares the payload instead of deep-copying it;
/// mutation through [`push`](Self::push) is copy-on-write.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(Arc<Vec<JsonValue>>);

impl JsonArray {
	/// Create a new `JsonArray` owning the given elements.
	#[must_use]
	pub fn new(values: Vec<JsonValue>) -> Self {
		Self(Arc::new(values))
	}

	/// Return the number of elements.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Return `true` if the array contains no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Return a reference to the element at `index`, if present.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	/// Return the elements as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[JsonValue] {
		&self.0
	}

	/// Return an iterator over the elements.
	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Append a value, copying the payload first if it is shared.
	pub fn push(&mut self, value: JsonValue) {
		Arc::make_mut(&mut self.0).push(value);
	}

	/// Serialize the JSON array to a compact string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Convert all elements to Rust `String`s, returning an error if any element is not a string.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect::<Result<Vec<_>>>()
	}

	/// Convert all elements to `f64`, returning an error if any element is not numeric.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_f64).collect::<Result<Vec<_>>>()
	}

	/// Convert elements to a fixed-size array of numbers, returning an error on
	/// length mismatch or non-numeric elements.
	pub fn as_number_array<const N: usize>(&self) -> Result<[f64; N]> {
		self
			.as_number_vec()?
			.try_into()
			.map_err(|e: Vec<f64>| anyhow!("vector length mismatch {} != {}", e.len(), N))
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
		JsonArray::new(iter.into_iter().collect())
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray::new(Vec::from_iter(input.into_iter().map(JsonValue::from)))
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray::new(Vec::from_iter(input.iter().map(|v| JsonValue::from(v.clone()))))
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray::new(Vec::from_iter(input.into_iter().map(JsonValue::from)))
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray::new(Vec::from_iter(input.iter().map(|v| JsonValue::from(*v))))
	}
}
