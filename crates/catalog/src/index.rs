//! CatalogIndex building and lookups.
//!
//! The index is derived entirely from the record list:
//! - one set of distinct values per dimension (year, genre, director, actor)
//! - the full record list, in payload order
//!
//! There is no incremental update path. A new record list means a new index.
//!
//! Rust concepts you'll see here:
//! - `HashSet` for distinct values
//! - `Arc<[T]>` to share an immutable record list cheaply
//! - Returning slices and references instead of owned copies

use crate::types::{Dimension, MovieRecord};
use std::collections::HashSet;
use std::sync::Arc;

/// Distinct values per dimension plus the records they came from.
///
/// The sets carry no ordering guarantee. Callers that show values to a
/// person should use `sorted_values`, which imposes a stable order.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    records: Arc<[MovieRecord]>,
    years: HashSet<String>,
    genres: HashSet<String>,
    directors: HashSet<String>,
    actors: HashSet<String>,
}

/// What `CatalogIndex::query` hands back for a selector
#[derive(Debug, Clone, Copy)]
pub enum IndexQuery<'a> {
    /// Distinct values of a dimension
    Values(&'a HashSet<String>),
    /// Every record, unfiltered and in original order
    Records(&'a [MovieRecord]),
}

impl IndexQuery<'_> {
    pub fn len(&self) -> usize {
        match self {
            IndexQuery::Values(values) => values.len(),
            IndexQuery::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CatalogIndex {
    /// Build the index from a decoded record list
    pub fn build(records: Vec<MovieRecord>) -> Self {
        let records: Arc<[MovieRecord]> = records.into();

        let index = Self {
            years: distinct_values(&records, Dimension::Year),
            genres: distinct_values(&records, Dimension::Genre),
            directors: distinct_values(&records, Dimension::Director),
            actors: distinct_values(&records, Dimension::Actor),
            records,
        };

        tracing::debug!(
            "Built catalog index: {} records, {} years, {} genres, {} directors, {} actors",
            index.records.len(),
            index.years.len(),
            index.genres.len(),
            index.directors.len(),
            index.actors.len()
        );
        index
    }

    /// An index over no records at all
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Distinct values for one dimension
    pub fn values(&self, dimension: Dimension) -> &HashSet<String> {
        match dimension {
            Dimension::Year => &self.years,
            Dimension::Genre => &self.genres,
            Dimension::Director => &self.directors,
            Dimension::Actor => &self.actors,
        }
    }

    /// Distinct values for one dimension in lexicographic order
    pub fn sorted_values(&self, dimension: Dimension) -> Vec<String> {
        let mut values: Vec<String> = self.values(dimension).iter().cloned().collect();
        values.sort_unstable();
        values
    }

    /// The full record list
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Query a dimension, or the whole record list when `dimension` is `None`
    pub fn query(&self, dimension: Option<Dimension>) -> IndexQuery<'_> {
        match dimension {
            Some(dimension) => IndexQuery::Values(self.values(dimension)),
            None => IndexQuery::Records(&self.records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get counts for debugging/validation: (records, years, genres, directors, actors)
    pub fn counts(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.records.len(),
            self.years.len(),
            self.genres.len(),
            self.directors.len(),
            self.actors.len(),
        )
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::empty()
    }
}

/// Flatten one dimension across all records into a set
fn distinct_values(records: &[MovieRecord], dimension: Dimension) -> HashSet<String> {
    records
        .iter()
        .flat_map(|record| dimension.values_of(record))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn movie(title: &str, year: &str, genre: &[&str], director: &str, actors: &[&str]) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: year.to_string(),
            genre: genre.iter().map(|s| s.to_string()).collect(),
            director: director.to_string(),
            actors: actors.iter().map(|s| s.to_string()).collect(),
            plot: String::new(),
            language: "English".to_string(),
            ratings: vec![Rating {
                source: "Internet Movie Database".to_string(),
                value: "8.0/10".to_string(),
            }],
            poster: None,
        }
    }

    fn create_test_records() -> Vec<MovieRecord> {
        vec![
            movie("Up", "2009", &["Animation", "Adventure"], "Pete Docter", &["Ed Asner", "Jordan Nagai"]),
            movie("Cars", "2006", &["Animation", "Comedy"], "John Lasseter", &["Owen Wilson"]),
            movie("Inside Out", "2015", &["Animation", "Adventure"], "Pete Docter", &["Amy Poehler"]),
        ]
    }

    #[test]
    fn test_single_record_index() {
        let index = CatalogIndex::build(vec![create_test_records().remove(0)]);

        let expected: HashSet<String> = ["Animation", "Adventure"].iter().map(|s| s.to_string()).collect();
        assert_eq!(index.values(Dimension::Genre), &expected);
        assert_eq!(index.query(None).len(), 1);
    }

    #[test]
    fn test_values_are_distinct() {
        let index = CatalogIndex::build(create_test_records());

        assert_eq!(index.values(Dimension::Genre).len(), 3);
        assert_eq!(index.values(Dimension::Director).len(), 2);
        assert_eq!(index.values(Dimension::Year).len(), 3);
        assert_eq!(index.values(Dimension::Actor).len(), 4);
        assert_eq!(index.counts(), (3, 3, 3, 2, 4));
    }

    #[test]
    fn test_every_value_comes_from_a_record() {
        let records = create_test_records();
        let index = CatalogIndex::build(records.clone());

        for dimension in Dimension::ALL {
            for value in index.values(dimension) {
                assert!(
                    records
                        .iter()
                        .any(|r| dimension.values_of(r).contains(&value.as_str())),
                    "{} value {:?} not found in any record",
                    dimension,
                    value
                );
            }
        }
    }

    #[test]
    fn test_duplicate_titles_are_distinct_records() {
        let first = movie("Up", "2009", &["Animation"], "Pete Docter", &["Ed Asner"]);
        let mut second = first.clone();
        second.plot = "Another cut".to_string();

        let index = CatalogIndex::build(vec![first, second]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.records()[1].plot, "Another cut");
        assert_eq!(index.values(Dimension::Year).len(), 1);
        assert!(index.values(Dimension::Year).contains("2009"));
    }

    #[test]
    fn test_records_keep_payload_order() {
        let index = CatalogIndex::build(create_test_records());
        let titles: Vec<&str> = index.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Up", "Cars", "Inside Out"]);

        match index.query(None) {
            IndexQuery::Records(records) => assert_eq!(records.len(), 3),
            IndexQuery::Values(_) => panic!("expected the record list"),
        }
    }

    #[test]
    fn test_sorted_values() {
        let index = CatalogIndex::build(create_test_records());
        assert_eq!(index.sorted_values(Dimension::Year), vec!["2006", "2009", "2015"]);
        assert_eq!(
            index.sorted_values(Dimension::Genre),
            vec!["Adventure", "Animation", "Comedy"]
        );
    }

    #[test]
    fn test_empty_index() {
        let index = CatalogIndex::empty();
        assert!(index.is_empty());
        for dimension in Dimension::ALL {
            assert!(index.values(dimension).is_empty());
            assert!(index.query(Some(dimension)).is_empty());
        }
        assert!(index.query(None).is_empty());
    }
}
