//! Error types for the catalog crate.
//!
//! Two layers of failure exist:
//! - `DecodeError`: the payload bytes could not be turned into records
//! - `LoadError`: reading the payload from disk failed, or decoding did
//!
//! Index building, searching and section toggling never fail, so nothing
//! else in the workspace needs an error type of its own.

use thiserror::Error;

/// Errors raised while decoding a raw movie payload.
///
/// `record` is always the zero-based position of the offending object in the
/// payload array, so a caller can point at the exact entry that broke.
///
/// Rust concept: `#[derive(Error)]` from thiserror writes the `Display` and
/// `std::error::Error` impls from the `#[error(...)]` attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Payload had no content at all (zero bytes or only whitespace)
    #[error("Payload is empty")]
    EmptyPayload,

    /// The bytes are not valid JSON (syntax error, truncated input, bad UTF-8)
    #[error("Corrupt payload at line {line}, column {column}: {reason}")]
    Corrupt {
        line: usize,
        column: usize,
        reason: String,
    },

    /// Top-level value was valid JSON but not an array of movies
    #[error("Expected an array of movies but found {found}")]
    NotAnArray { found: &'static str },

    /// An entry in the array was not an object
    #[error("Record {record}: expected an object but found {found}")]
    NotAnObject { record: usize, found: &'static str },

    /// A required key was absent from a record
    #[error("Record {record}: missing required key '{key}'")]
    MissingKey { record: usize, key: String },

    /// A key was present but held the wrong kind of value
    #[error("Record {record}: key '{key}' expected {expected} but found {found}")]
    TypeMismatch {
        record: usize,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DecodeError {
    /// Index of the record that failed, when the failure is tied to one
    pub fn record(&self) -> Option<usize> {
        match self {
            DecodeError::NotAnObject { record, .. }
            | DecodeError::MissingKey { record, .. }
            | DecodeError::TypeMismatch { record, .. } => Some(*record),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Corrupt {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Errors raised while loading a catalog from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File was read but its contents did not decode
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },
}

/// Convenience type alias for decode results in this crate
pub type Result<T> = std::result::Result<T, DecodeError>;
