use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as_string, parse_object_entries, parse_quoted_json_string,
	parse_tag,
};
use anyhow::{Context, Result};

/// Parse a complete JSON document into a `JsonValue`.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_str(json, true);
	parse_json_iter(&mut iter).with_context(|| format!("while parsing JSON '{json}'"))
}

/// Parse the next JSON value from a byte iterator.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_json_iter).map(|i| JsonValue::Array(JsonArray::new(i))),
		b'{' => parse_json_object(iter),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_json_number(iter),
		b't' => parse_tag(iter, "true").map(|_| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|_| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|_| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator) -> Result<JsonValue> {
	let mut list: Vec<(String, JsonValue)> = Vec::new();
	parse_object_entries(iter, |key, iter2| {
		list.push((key, parse_json_iter(iter2)?));
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject::from_iter(list)))
}

/// Classify a number literal: fraction or exponent makes it a `Double`,
/// a leading minus an `Int`, anything else a `UInt`. Integers that overflow
/// their 64-bit type fall back to `Double`.
fn parse_json_number(iter: &mut ByteIterator) -> Result<JsonValue> {
	let number = parse_number_as_string(iter)?;

	if number.contains('.') || number.contains('e') || number.contains('E') {
		return number
			.parse::<f64>()
			.map(JsonValue::Double)
			.map_err(|_| iter.format_error("invalid number"));
	}

	if number.starts_with('-') {
		if let Ok(value) = number.parse::<i64>() {
			return Ok(JsonValue::Int(value));
		}
	} else if let Ok(value) = number.parse::<u64>() {
		return Ok(JsonValue::UInt(value));
	}

	number
		.parse::<f64>()
		.map(JsonValue::Double)
		.map_err(|_| iter.format_error("invalid number"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	#[test]
	fn simple() {
		let data = r##"{"users":{"user1":{"city":"Nantes","country":"France"},"user2":{"city":"Bruxelles","country":"Belgium"},"user3":{"city":"Paris","country":"France","age":30}},"countries":["France","Belgium"]}"##;
		let json = parse_json_str(data).unwrap();
		assert_eq!(
			json,
			v(vec![
				(
					"users",
					v(vec![
						("user1", v(vec![("city", "Nantes"), ("country", "France")])),
						("user2", v(vec![("city", "Bruxelles"), ("country", "Belgium")])),
						(
							"user3",
							v(vec![("city", v("Paris")), ("country", v("France")), ("age", v(30))])
						)
					])
				),
				("countries", v(vec!["France", "Belgium"]))
			])
		);
	}

	#[test]
	fn error() {
		let data = r##"{"city":"Nantes","country","France"}"##;
		let json = parse_json_str(data);
		assert!(
			json
				.unwrap_err()
				.chain()
				.last()
				.unwrap()
				.to_string()
				.contains("expected ':'")
		);
	}

	#[test]
	fn test_whitespaces() -> Result<()> {
		let result = v(vec![(
			"a",
			v(vec![
				v(vec![("b", JsonValue::from(7)), ("c", JsonValue::from(true))]),
				v(vec![
					("d", JsonValue::from(false)),
					("e", JsonValue::Null),
					("f", JsonValue::from("g")),
				]),
			]),
		)]);

		let data = r##"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_,_"f"_:_"g"_}_]_}_"##;

		assert_eq!(parse_json_str(&data.replace('_', ""))?, result);
		assert_eq!(parse_json_str(&data.replace('_', " "))?, result);
		assert_eq!(parse_json_str(&data.replace('_', "\t"))?, result);
		assert_eq!(parse_json_str(&data.replace('_', "\n"))?, result);
		assert_eq!(parse_json_str(&data.replace('_', "\r"))?, result);

		Ok(())
	}

	#[test]
	fn test_empty_object() {
		let json = parse_json_str("{}").unwrap();
		assert_eq!(json, JsonValue::new_object());
	}

	#[test]
	fn test_empty_array() {
		let json = parse_json_str("[]").unwrap();
		assert_eq!(json, JsonValue::new_array());
	}

	#[test]
	fn test_nested_array() {
		let json = parse_json_str("[1, [2, 3], 4]").unwrap();
		assert_eq!(json, v(vec![v(1), v(vec![v(2), v(3)]), v(4)]));
	}

	#[test]
	fn test_nested_object() {
		let json = parse_json_str(r##"{"a": {"b": {"c": "d"}}}"##).unwrap();
		assert_eq!(json, v(vec![("a", v(vec![("b", v(vec![("c", v("d"))]))]))]));
	}

	#[test]
	fn test_null_value() {
		let json = parse_json_str(r##"{"key": null}"##).unwrap();
		assert_eq!(json, v(vec![("key", JsonValue::Null)]));
	}

	#[test]
	fn test_boolean_value() {
		let json = parse_json_str(r##"{"key1": true, "key2": false}"##).unwrap();
		assert_eq!(json, v(vec![("key1", v(true)), ("key2", v(false))]));
	}

	#[test]
	fn test_number_classification() {
		assert_eq!(parse_json_str("42").unwrap(), JsonValue::UInt(42));
		assert_eq!(parse_json_str("-42").unwrap(), JsonValue::Int(-42));
		assert_eq!(parse_json_str("23.42").unwrap(), JsonValue::Double(23.42));
		assert_eq!(parse_json_str("-0.5").unwrap(), JsonValue::Double(-0.5));
		assert_eq!(parse_json_str("1e3").unwrap(), JsonValue::Double(1000.0));
		assert_eq!(parse_json_str("2E-2").unwrap(), JsonValue::Double(0.02));
	}

	#[test]
	fn test_number_overflow_falls_back_to_double() {
		// Too large for u64/i64, still representable as f64
		let json = parse_json_str("99999999999999999999999999").unwrap();
		assert!(matches!(json, JsonValue::Double(_)));

		let json = parse_json_str("-99999999999999999999999999").unwrap();
		assert!(matches!(json, JsonValue::Double(_)));
	}

	#[test]
	fn test_string_value() {
		let json = parse_json_str(r##"{"key": "value"}"##).unwrap();
		assert_eq!(json, v(vec![("key", v("value"))]));
	}

	#[test]
	fn test_invalid_json_missing_colon() {
		let json = parse_json_str(r##"{"key" "value"}"##);
		assert!(
			json
				.unwrap_err()
				.chain()
				.last()
				.unwrap()
				.to_string()
				.contains("expected ':'")
		);
	}

	#[test]
	fn test_invalid_json_unclosed_brace() {
		let json = parse_json_str(r##"{"key": "value""##);
		assert!(
			json
				.unwrap_err()
				.chain()
				.last()
				.unwrap()
				.to_string()
				.contains("unexpected end")
		);
	}

	#[test]
	fn test_invalid_json_unclosed_bracket() {
		let json = parse_json_str(r##"["key", "value""##);
		assert!(
			json
				.unwrap_err()
				.chain()
				.last()
				.unwrap()
				.to_string()
				.contains("unexpected end")
		);
	}
}
