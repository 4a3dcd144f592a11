//! Error type raised when a generic JSON value violates the GeoJSON structural contract.

use std::error::Error;
use std::fmt;

/// A structural decoding failure.
///
/// Decoding fails fast: the first violation encountered during the depth-first
/// traversal aborts the whole decode and surfaces to the caller. There is no
/// partial result and no accumulation of multiple errors. Encoding never fails.
///
/// The variants are the error categories; `Display` gives the descriptive
/// message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
	/// A required object member (`type`, `coordinates`, `geometry`,
	/// `geometries`, `features`) is absent.
	MissingMember(String),
	/// A member has the wrong value variant, e.g. a non-string `type`,
	/// a non-array `coordinates`, or a non-numeric coordinate.
	WrongType(String),
	/// The `type` string does not match any recognized geometry, feature or
	/// collection kind.
	UnknownDiscriminator(String),
	/// A coordinate array is too short, or a ring fails the closure or
	/// minimum-point requirement.
	ArityViolation(String),
	/// Geometry nesting exceeded the supported depth; decoding fails closed
	/// instead of overflowing the stack.
	RecursionLimit(usize),
}

impl DecodeError {
	pub(crate) fn missing_member(msg: impl Into<String>) -> Self {
		Self::MissingMember(msg.into())
	}

	pub(crate) fn wrong_type(msg: impl Into<String>) -> Self {
		Self::WrongType(msg.into())
	}

	pub(crate) fn unknown_discriminator(msg: impl Into<String>) -> Self {
		Self::UnknownDiscriminator(msg.into())
	}

	pub(crate) fn arity_violation(msg: impl Into<String>) -> Self {
		Self::ArityViolation(msg.into())
	}
}

impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingMember(msg)
			| Self::WrongType(msg)
			| Self::UnknownDiscriminator(msg)
			| Self::ArityViolation(msg) => write!(f, "{msg}"),
			Self::RecursionLimit(limit) => write!(f, "geometry nesting exceeds {limit} levels"),
		}
	}
}

impl Error for DecodeError {}
