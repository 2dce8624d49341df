//! Live search over the catalog.
//!
//! A query matches a record when the lowercased query is a substring of the
//! lowercased title, year, director, or any single genre or actor. Plot,
//! language, poster and ratings are never searched.
//!
//! There is no ranking: results keep the order of the input list.

use catalog::MovieRecord;

/// A normalized search string.
///
/// ## Usage
/// ```ignore
/// let query = SearchQuery::new("ar");
/// if query.is_active() {
///     let hits: Vec<_> = records.iter().filter(|r| query.matches(r)).collect();
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    active: bool,
}

impl SearchQuery {
    /// Normalize raw input from the search box.
    ///
    /// Whitespace-only input counts as "no search". Otherwise the text is
    /// lowercased as typed, surrounding spaces included.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
            active: !raw.trim().is_empty(),
        }
    }

    /// True when the query should replace the grouped view
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The lowercased query text
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Check one record against the query.
    ///
    /// An inactive query matches everything.
    pub fn matches(&self, record: &MovieRecord) -> bool {
        if !self.active {
            return true;
        }
        let needle = self.needle.as_str();

        contains_ci(&record.title, needle)
            || contains_ci(&record.year, needle)
            || record.genre.iter().any(|genre| contains_ci(genre, needle))
            || record.actors.iter().any(|actor| contains_ci(actor, needle))
            || contains_ci(&record.director, needle)
    }
}

/// Substring test against an already-lowercased needle
fn contains_ci(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Borrow every record matching `query`, in input order.
///
/// An inactive query borrows every record.
pub fn filter_refs<'a>(records: &'a [MovieRecord], query: &SearchQuery) -> Vec<&'a MovieRecord> {
    let matched: Vec<&MovieRecord> = records
        .iter()
        .filter(|record| query.matches(record))
        .collect();

    if query.is_active() {
        tracing::debug!(
            "Search {:?}: {} of {} records matched",
            query.as_str(),
            matched.len(),
            records.len()
        );
    }
    matched
}

/// Return every record matching `query`, in input order.
///
/// An empty (or whitespace-only) query returns the input unchanged.
pub fn filter(records: &[MovieRecord], query: &str) -> Vec<MovieRecord> {
    filter_refs(records, &SearchQuery::new(query))
        .into_iter()
        .cloned()
        .collect()
}
