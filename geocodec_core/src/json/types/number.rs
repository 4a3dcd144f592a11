//! JSON number conversions for `JsonValue` and numeric types.
//!
//! `From` implementations map Rust numerics onto the three numeric variants:
//! floats become `Double`, negative signed integers become `Int`, and all
//! other integers become `UInt` — the same classification the text parser
//! applies to number literals.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Double(input)
	}
}

impl From<f32> for JsonValue {
	fn from(input: f32) -> Self {
		JsonValue::Double(f64::from(input))
	}
}

/// Implement `From<Number>` for `JsonValue` for unsigned integer types.
macro_rules! impl_from_unsigned {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::UInt(input as u64)
				}
			}
		)+
	};
}

/// Implement `From<Number>` for `JsonValue` for signed integer types.
macro_rules! impl_from_signed {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					if input < 0 {
						JsonValue::Int(input as i64)
					} else {
						JsonValue::UInt(input as u64)
					}
				}
			}
		)+
	};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(JsonValue::from(0u8), JsonValue::UInt(0))]
	#[case(JsonValue::from(255u8), JsonValue::UInt(255))]
	#[case(JsonValue::from(65535u16), JsonValue::UInt(65535))]
	#[case(JsonValue::from(1_000_000_000u32), JsonValue::UInt(1_000_000_000))]
	#[case(JsonValue::from(u64::MAX), JsonValue::UInt(u64::MAX))]
	#[case(JsonValue::from(123_456usize), JsonValue::UInt(123_456))]
	fn from_unsigned(#[case] value: JsonValue, #[case] expected: JsonValue) {
		assert_eq!(value, expected);
	}

	#[rstest]
	#[case(JsonValue::from(-128i8), JsonValue::Int(-128))]
	#[case(JsonValue::from(127i8), JsonValue::UInt(127))]
	#[case(JsonValue::from(-32768i16), JsonValue::Int(-32768))]
	#[case(JsonValue::from(-1), JsonValue::Int(-1))]
	#[case(JsonValue::from(0), JsonValue::UInt(0))]
	#[case(JsonValue::from(i64::MIN), JsonValue::Int(i64::MIN))]
	#[case(JsonValue::from(i64::MAX), JsonValue::UInt(i64::MAX as u64))]
	fn from_signed(#[case] value: JsonValue, #[case] expected: JsonValue) {
		assert_eq!(value, expected);
	}

	#[test]
	fn from_floats() {
		assert_eq!(JsonValue::from(0.0), JsonValue::Double(0.0));
		assert_eq!(JsonValue::from(-1.5), JsonValue::Double(-1.5));
		assert_eq!(JsonValue::from(3.5f32), JsonValue::Double(3.5));
	}
}
