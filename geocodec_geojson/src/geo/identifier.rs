use geocodec_core::json::JsonValue;
use std::fmt::Display;

/// A Feature identifier: a string or a number.
///
/// The numeric variants keep the representation of the source value, so an
/// identifier read from `"id": 1234` stays an unsigned integer through a
/// round-trip. A feature without an id carries `None` instead of an
/// identifier.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoIdentifier {
	Double(f64),
	Int(i64),
	String(String),
	UInt(u64),
}

impl GeoIdentifier {
	/// Encodes the identifier as a JSON value, preserving the numeric variant.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			GeoIdentifier::Double(v) => JsonValue::Double(*v),
			GeoIdentifier::Int(v) => JsonValue::Int(*v),
			GeoIdentifier::String(v) => JsonValue::String(v.clone()),
			GeoIdentifier::UInt(v) => JsonValue::UInt(*v),
		}
	}
}

impl From<&str> for GeoIdentifier {
	fn from(value: &str) -> Self {
		GeoIdentifier::String(value.to_string())
	}
}

impl From<String> for GeoIdentifier {
	fn from(value: String) -> Self {
		GeoIdentifier::String(value)
	}
}

impl From<i64> for GeoIdentifier {
	fn from(value: i64) -> Self {
		GeoIdentifier::Int(value)
	}
}

impl From<u64> for GeoIdentifier {
	fn from(value: u64) -> Self {
		GeoIdentifier::UInt(value)
	}
}

impl From<f64> for GeoIdentifier {
	fn from(value: f64) -> Self {
		GeoIdentifier::Double(value)
	}
}

impl Display for GeoIdentifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoIdentifier::Double(v) => write!(f, "{v}"),
			GeoIdentifier::Int(v) => write!(f, "{v}"),
			GeoIdentifier::String(v) => write!(f, "{v}"),
			GeoIdentifier::UInt(v) => write!(f, "{v}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_impls_keep_the_variant() {
		assert_eq!(GeoIdentifier::from("abcd"), GeoIdentifier::String("abcd".to_string()));
		assert_eq!(GeoIdentifier::from(1234u64), GeoIdentifier::UInt(1234));
		assert_eq!(GeoIdentifier::from(-5i64), GeoIdentifier::Int(-5));
		assert_eq!(GeoIdentifier::from(2.5), GeoIdentifier::Double(2.5));
	}

	#[test]
	fn to_json_keeps_the_variant() {
		assert_eq!(GeoIdentifier::UInt(7).to_json(), JsonValue::UInt(7));
		assert_eq!(GeoIdentifier::Int(-7).to_json(), JsonValue::Int(-7));
		assert_eq!(GeoIdentifier::Double(0.5).to_json(), JsonValue::Double(0.5));
		assert_eq!(
			GeoIdentifier::from("abcd").to_json(),
			JsonValue::String("abcd".to_string())
		);
	}

	#[test]
	fn display() {
		assert_eq!(GeoIdentifier::from("abcd").to_string(), "abcd");
		assert_eq!(GeoIdentifier::UInt(42).to_string(), "42");
	}
}
