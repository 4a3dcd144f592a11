mod parse;
mod stringify;
mod types;

pub use parse::{parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
