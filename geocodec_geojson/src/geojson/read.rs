//! Reading GeoJSON from readers, including newline-delimited GeoJSON
//! (NDGeoJSON) feature streams with both synchronous iterator and
//! asynchronous stream interfaces.

use super::{decode_feature, parse_geojson};
use crate::{GeoFeature, GeoJson};
use anyhow::{Error, Result, anyhow};
use futures::{Stream, StreamExt, future::ready, stream};
use geocodec_core::json::JsonValue;
use std::io::{BufRead, Read};

/// Reads a complete GeoJSON document from a reader.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoJson> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

/// Process a single line of NDGeoJSON, decoding it into a `GeoFeature`.
///
/// Skips empty or whitespace-only lines. Errors include line number context.
fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None),
		Ok(line) => JsonValue::parse_str(&line)
			.and_then(|value| Ok(decode_feature(&value)?))
			.map(Some)
			.map_err(|e| anyhow!("line {}: {}", index + 1, e)),
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Creates a synchronous iterator over NDGeoJSON features from a buffered reader.
///
/// Each non-empty line is decoded as a `Feature`; empty lines are skipped.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

/// Creates an asynchronous stream over NDGeoJSON features from a buffered reader.
///
/// Lines are decoded concurrently on tokio tasks and buffered by CPU count.
/// Empty lines are skipped, and errors include line number context.
pub fn read_ndgeojson_stream(reader: impl BufRead) -> impl Stream<Item = Result<GeoFeature>> {
	stream::iter(reader.lines().enumerate())
		.map(|(index, line)| tokio::spawn(async move { process_line(line, index).transpose() }))
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}
