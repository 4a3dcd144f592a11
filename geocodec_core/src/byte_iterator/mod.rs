//! Byte-level iteration over a text source, plus the small parsing helpers
//! built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
