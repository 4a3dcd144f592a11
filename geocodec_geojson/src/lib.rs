//! Strongly typed GeoJSON domain model with a decoder and encoder against the
//! generic JSON value model from `geocodec_core`.

mod error;
mod geo;
pub mod geojson;

pub use error::DecodeError;
pub use geo::*;
pub use geojson::*;
