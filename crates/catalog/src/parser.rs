//! Parser for raw movie payloads.
//!
//! The payload is a JSON array with one object per movie, keyed by the
//! upstream source's names:
//! `Title`, `Year`, `Genre`, `Director`, `Actors`, `Plot`, `Language`,
//! `Ratings`, `Poster`.
//!
//! `Genre` and `Actors` arrive as single comma-joined strings
//! ("Animation, Adventure") and are split here, once, into vectors.
//!
//! Decoding is all-or-nothing: the first bad record fails the whole batch.

use crate::error::{DecodeError, Result};
use crate::types::{MovieRecord, Rating};
use serde_json::{Map, Value};

/// Separator used by the source for multi-valued fields
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Parse a raw payload into movie records
pub fn parse(payload: &[u8]) -> Result<Vec<MovieRecord>> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::EmptyPayload);
    }
    let root: Value = serde_json::from_slice(payload)?;
    parse_value(root)
}

/// Parse a payload that is already text
pub fn parse_str(payload: &str) -> Result<Vec<MovieRecord>> {
    parse(payload.as_bytes())
}

fn parse_value(root: Value) -> Result<Vec<MovieRecord>> {
    let entries = match root {
        Value::Array(entries) => entries,
        other => {
            return Err(DecodeError::NotAnArray {
                found: kind_of(&other),
            })
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(record, entry)| parse_record(record, entry))
        .collect()
}

/// Decode a single movie object
///
/// Rust concept: collecting an iterator of `Result<T>` into `Result<Vec<T>>`
/// stops at the first `Err`, which is exactly the whole-batch behavior above.
fn parse_record(record: usize, entry: &Value) -> Result<MovieRecord> {
    let fields = entry.as_object().ok_or(DecodeError::NotAnObject {
        record,
        found: kind_of(entry),
    })?;

    Ok(MovieRecord {
        title: required_str(fields, record, "Title")?.to_string(),
        year: required_str(fields, record, "Year")?.to_string(),
        genre: split_multi(required_str(fields, record, "Genre")?),
        director: required_str(fields, record, "Director")?.to_string(),
        actors: split_multi(required_str(fields, record, "Actors")?),
        plot: required_str(fields, record, "Plot")?.to_string(),
        language: required_str(fields, record, "Language")?.to_string(),
        ratings: parse_ratings(fields, record)?,
        // Absent, null or non-string posters just mean "no image"
        poster: fields
            .get("Poster")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn parse_ratings(fields: &Map<String, Value>, record: usize) -> Result<Vec<Rating>> {
    let value = fields.get("Ratings").ok_or_else(|| DecodeError::MissingKey {
        record,
        key: "Ratings".to_string(),
    })?;
    let entries = value.as_array().ok_or_else(|| DecodeError::TypeMismatch {
        record,
        key: "Ratings".to_string(),
        expected: "array",
        found: kind_of(value),
    })?;

    let mut ratings = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let key = format!("Ratings[{}]", idx);
        let rating = entry.as_object().ok_or_else(|| DecodeError::TypeMismatch {
            record,
            key: key.clone(),
            expected: "object",
            found: kind_of(entry),
        })?;

        ratings.push(Rating {
            source: nested_str(rating, record, &key, "Source")?.to_string(),
            value: nested_str(rating, record, &key, "Value")?.to_string(),
        });
    }
    Ok(ratings)
}

/// Look up a key that must hold a string
fn required_str<'a>(fields: &'a Map<String, Value>, record: usize, key: &str) -> Result<&'a str> {
    let value = fields.get(key).ok_or_else(|| DecodeError::MissingKey {
        record,
        key: key.to_string(),
    })?;
    value.as_str().ok_or_else(|| DecodeError::TypeMismatch {
        record,
        key: key.to_string(),
        expected: "string",
        found: kind_of(value),
    })
}

/// Same as `required_str`, reporting the key as `parent.key`
fn nested_str<'a>(
    fields: &'a Map<String, Value>,
    record: usize,
    parent: &str,
    key: &str,
) -> Result<&'a str> {
    required_str(fields, record, key).map_err(|err| match err {
        DecodeError::MissingKey { record, key } => DecodeError::MissingKey {
            record,
            key: format!("{}.{}", parent, key),
        },
        DecodeError::TypeMismatch {
            record,
            key,
            expected,
            found,
        } => DecodeError::TypeMismatch {
            record,
            key: format!("{}.{}", parent, key),
            expected,
            found,
        },
        other => other,
    })
}

/// Split a comma-joined field into trimmed values
///
/// Example: "Animation, Adventure" -> ["Animation", "Adventure"]
///
/// An empty string yields `[""]`, not an empty vector.
pub fn split_multi(s: &str) -> Vec<String> {
    s.split(MULTI_VALUE_SEPARATOR)
        .map(|part| part.trim().to_string())
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
