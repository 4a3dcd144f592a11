//! JSON value enum representing any valid JSON data and utilities for parsing,
//! serializing, and converting.

use crate::json::*;
use anyhow::{Result, bail};

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
///
/// Numbers keep their source representation: `Int` for negative integers,
/// `UInt` for non-negative integers, and `Double` for anything with a fraction
/// or exponent. Consumers that just need "a number" should go through
/// [`as_f64`](Self::as_f64), which accepts all three variants.
///
/// Array and object payloads are shared: cloning a value is cheap and clones
/// reference the same payload until one of them is mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(JsonObject),
	String(String),
	UInt(u64),
}

impl JsonValue {
	/// Parse a JSON string into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	///
	/// All three numeric variants report `"number"`.
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Double(_) | Int(_) | UInt(_) => "number",
			Null => "null",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize the `JsonValue` to a compact JSON string without unnecessary whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty JSON object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	/// Return `true` if this value is JSON `null`.
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found a {}", self.type_as_str())
		}
	}

	/// Consume the `JsonValue` and extract the `JsonArray` if it is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn into_array(self) -> Result<JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found a {}", self.type_as_str())
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Consume the `JsonValue` and extract the `JsonObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Return the string value as `String`, cloning if necessary.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_string(&self) -> Result<String> {
		match self {
			JsonValue::String(text) => Ok(text.to_owned()),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Normalize any of the three numeric variants to `f64`.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_f64(&self) -> Result<f64> {
		match self {
			JsonValue::Double(val) => Ok(*val),
			JsonValue::Int(val) => Ok(*val as f64),
			JsonValue::UInt(val) => Ok(*val as f64),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_str() {
		let result: JsonValue = "hello".into();
		assert_eq!(result, JsonValue::String("hello".to_string()));
	}

	#[test]
	fn test_from_string() {
		let result: JsonValue = String::from("hello").into();
		assert_eq!(result, JsonValue::String("hello".to_string()));
	}

	#[test]
	fn test_from_bool() {
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(false), JsonValue::Boolean(false));
	}

	#[test]
	fn test_from_numbers() {
		assert_eq!(JsonValue::from(23.42), JsonValue::Double(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::UInt(42));
		assert_eq!(JsonValue::from(-42), JsonValue::Int(-42));
	}

	#[test]
	fn test_from_vec_of_json_values() {
		let result = JsonValue::from(vec![
			JsonValue::from("value1"),
			JsonValue::from(true),
			JsonValue::from(23.42),
		]);
		assert_eq!(
			result,
			JsonValue::Array(JsonArray::new(vec![
				JsonValue::String("value1".to_string()),
				JsonValue::Boolean(true),
				JsonValue::Double(23.42),
			]))
		);
	}

	#[test]
	fn test_from_vec_of_str() {
		let result = JsonValue::from(vec!["value1", "value2"]);
		assert_eq!(
			result,
			JsonValue::Array(JsonArray::new(vec![
				JsonValue::String("value1".to_string()),
				JsonValue::String("value2".to_string()),
			]))
		);
	}

	#[test]
	fn test_type_as_str() {
		assert_eq!(JsonValue::String("value".to_string()).type_as_str(), "string");
		assert_eq!(JsonValue::Double(42.0).type_as_str(), "number");
		assert_eq!(JsonValue::Int(-42).type_as_str(), "number");
		assert_eq!(JsonValue::UInt(42).type_as_str(), "number");
		assert_eq!(JsonValue::Boolean(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::new_array().type_as_str(), "array");
		assert_eq!(JsonValue::new_object().type_as_str(), "object");
	}

	#[test]
	fn test_is_null() {
		assert!(JsonValue::Null.is_null());
		assert!(!JsonValue::UInt(0).is_null());
	}

	#[test]
	fn test_stringify() {
		assert_eq!(
			JsonValue::Array(JsonArray::new(vec![
				JsonValue::String("value".to_string()),
				JsonValue::UInt(42)
			]))
			.stringify(),
			r#"["value",42]"#
		);

		assert_eq!(
			JsonValue::Object(JsonObject::from(vec![("key", "value")])).stringify(),
			r#"{"key":"value"}"#
		);
	}

	#[test]
	fn test_as_array_into_array() {
		let value = JsonValue::new_array();

		assert!(value.as_array().is_ok());
		assert!(value.into_array().is_ok());

		let non_array = JsonValue::String("not an array".to_string());
		assert!(non_array.as_array().is_err());
		assert!(non_array.into_array().is_err());
	}

	#[test]
	fn test_as_object_into_object() {
		let value = JsonValue::new_object();

		assert!(value.as_object().is_ok());
		assert!(value.into_object().is_ok());

		let non_object = JsonValue::String("not an object".to_string());
		assert!(non_object.as_object().is_err());
		assert!(non_object.into_object().is_err());
	}

	#[test]
	fn test_as_string_as_str() {
		let value = JsonValue::String("value".to_string());

		assert_eq!(value.as_string().unwrap(), "value");
		assert_eq!(value.as_str().unwrap(), "value");

		let non_string = JsonValue::UInt(42);
		assert!(non_string.as_string().is_err());
		assert!(non_string.as_str().is_err());
	}

	#[test]
	fn test_as_f64_accepts_all_numeric_variants() {
		assert_eq!(JsonValue::Double(1.5).as_f64().unwrap(), 1.5);
		assert_eq!(JsonValue::Int(-7).as_f64().unwrap(), -7.0);
		assert_eq!(JsonValue::UInt(9).as_f64().unwrap(), 9.0);

		assert_eq!(
			JsonValue::from("nope").as_f64().unwrap_err().to_string(),
			"expected a number, found a string"
		);
	}

	#[test]
	fn test_clone_shares_array_payload() {
		let value = JsonValue::from(vec![JsonValue::UInt(1), JsonValue::UInt(2)]);
		let clone = value.clone();

		let (a, b) = (value.as_array().unwrap(), clone.as_array().unwrap());
		assert_eq!(a, b);
		assert!(std::ptr::eq(a.as_slice().as_ptr(), b.as_slice().as_ptr()));
	}

	#[test]
	fn test_parse_str() {
		let json = r#"{"key":"value","number":42}"#;
		let parsed = JsonValue::parse_str(json).unwrap();

		assert_eq!(
			parsed,
			JsonValue::from(vec![
				("key", JsonValue::from("value")),
				("number", JsonValue::UInt(42))
			])
		);

		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}
}
