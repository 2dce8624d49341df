//! Catalog loading and atomic replacement.
//!
//! A `Catalog` owns exactly one `CatalogIndex` snapshot behind an `Arc`.
//! The record list lives inside the index, so swapping the `Arc` replaces
//! records and index together and nobody can observe one without the other.

use crate::error::{DecodeError, LoadError};
use crate::index::CatalogIndex;
use crate::parser;
use std::path::Path;
use std::sync::Arc;

/// The loaded movie collection plus its derived index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    snapshot: Arc<CatalogIndex>,
}

impl Catalog {
    /// Decode a payload and build a catalog from it
    pub fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let records = parser::parse(payload)?;
        tracing::info!("Decoded {} movie records", records.len());
        Ok(Self {
            snapshot: Arc::new(CatalogIndex::build(records)),
        })
    }

    /// Decode a payload, falling back to an empty catalog on failure.
    ///
    /// A partially decoded catalog is never produced.
    pub fn from_payload_or_empty(payload: &[u8]) -> Self {
        Self::from_payload(payload).unwrap_or_else(|err| {
            tracing::warn!("Failed to decode movie payload, using empty catalog: {}", err);
            Self::default()
        })
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("Loading movie catalog from {:?}", path);

        let payload = std::fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LoadError::IoError(err),
        })?;
        tracing::debug!("Read {} bytes from {:?}", payload.len(), path);

        Self::from_payload(&payload).map_err(|source| LoadError::Decode {
            path: path.display().to_string(),
            source,
        })
    }

    /// Rebuild from a new payload.
    ///
    /// On success the old snapshot is replaced in one assignment. On failure
    /// the current snapshot stays in place and the error is returned.
    pub fn reload(&mut self, payload: &[u8]) -> Result<(), DecodeError> {
        let fresh = Self::from_payload(payload)?;
        self.snapshot = fresh.snapshot;
        Ok(())
    }

    /// The current index, shared with any number of readers
    pub fn snapshot(&self) -> Arc<CatalogIndex> {
        Arc::clone(&self.snapshot)
    }

    /// Borrow the current index
    pub fn index(&self) -> &CatalogIndex {
        &self.snapshot
    }
}
