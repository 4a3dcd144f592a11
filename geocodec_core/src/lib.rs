//! Generic JSON value model with a byte-level tokenizer, text reading and serialization.

pub mod byte_iterator;
pub mod json;
