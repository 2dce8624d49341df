//! # Catalog Crate
//!
//! This crate decodes a movie payload and indexes it for browsing.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Rating, Dimension)
//! - **parser**: Decode the JSON payload into records
//! - **index**: Distinct values per dimension plus the full record list
//! - **loader**: Load from disk and swap snapshots atomically
//! - **error**: Error types for decoding and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Dimension};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//! let index = catalog.index();
//!
//! for genre in index.sorted_values(Dimension::Genre) {
//!     println!("{}", genre);
//! }
//! println!("{} movies", index.records().len());
//! ```

// Public modules
pub mod loader;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::Catalog;
pub use error::{DecodeError, LoadError, Result};
pub use index::{CatalogIndex, IndexQuery};
pub use parser::{parse, parse_str, split_multi};
pub use types::{Dimension, MovieRecord, Rating};
