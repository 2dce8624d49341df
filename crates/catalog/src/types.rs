//! Core domain types for the movie catalog.
//!
//! This module defines the records the rest of the workspace works with.
//! Key Rust concepts demonstrated here:
//! - Structs with public fields and serde renames for external key names
//! - Enums for a fixed set of browse dimensions
//! - Returning borrowed `&str` views instead of cloning strings

use serde::Serialize;
use std::fmt;

// =============================================================================
// Movie Record
// =============================================================================

/// One entry in the catalog.
///
/// Records are built once by the parser and never mutated afterwards.
/// Multi-valued fields (`genre`, `actors`) are already split into their
/// individual values; nothing downstream re-joins them.
///
/// Serialization writes the same external key names the payload uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    /// Kept as text: series payloads carry ranges such as "2011–2019"
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Genre")]
    pub genre: Vec<String>,
    /// Single opaque value, even when the source lists several directors
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actors")]
    pub actors: Vec<String>,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Ratings")]
    pub ratings: Vec<Rating>,
    #[serde(rename = "Poster", skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl MovieRecord {
    /// Poster reference, but only if it is an absolute http(s) URL.
    ///
    /// Payloads use placeholders like "N/A" for missing posters; those and
    /// any other malformed value simply mean "no image".
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.as_deref()?.trim();
        let rest = poster
            .strip_prefix("https://")
            .or_else(|| poster.strip_prefix("http://"))?;
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            return None;
        }
        Some(poster)
    }
}

/// A rating from one external source, e.g. "Rotten Tomatoes" / "87%".
///
/// The value is opaque text: "8.1/10", "87%" and "74/100" all appear in
/// real payloads and none of them are coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

// =============================================================================
// Dimensions
// =============================================================================

/// A categorical axis the catalog is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Year,
    Genre,
    Director,
    Actor,
}

impl Dimension {
    /// All dimensions, in display order
    pub const ALL: [Dimension; 4] = [
        Dimension::Year,
        Dimension::Genre,
        Dimension::Director,
        Dimension::Actor,
    ];

    /// The values a record contributes to this dimension.
    ///
    /// Single-valued fields yield exactly one value; genre and actors yield
    /// one per entry.
    pub fn values_of<'a>(&self, record: &'a MovieRecord) -> Vec<&'a str> {
        match self {
            Dimension::Year => vec![record.year.as_str()],
            Dimension::Director => vec![record.director.as_str()],
            Dimension::Genre => record.genre.iter().map(String::as_str).collect(),
            Dimension::Actor => record.actors.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Year => "year",
            Dimension::Genre => "genre",
            Dimension::Director => "director",
            Dimension::Actor => "actor",
        };
        f.write_str(name)
    }
}
