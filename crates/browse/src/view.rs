//! Deriving what the display shows.
//!
//! Precedence:
//! 1. An active search replaces everything with one "Search Results" group.
//! 2. Otherwise there are five groups in `Section::ALL` order, each empty
//!    while collapsed.
//!
//! Distinct values are sorted here, at the display boundary, because the
//! index itself keeps them in unordered sets.

use crate::search::{filter_refs, SearchQuery};
use crate::sections::{Section, SectionState};
use catalog::{CatalogIndex, MovieRecord};

/// Header of the single group shown while searching
pub const SEARCH_RESULTS_TITLE: &str = "Search Results";

/// Rows of one group, borrowed from the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRows<'a> {
    /// Distinct dimension values, display-only
    Values(Vec<&'a str>),
    /// Full records, selectable for the detail view
    Records(Vec<&'a MovieRecord>),
}

impl GroupRows<'_> {
    pub fn len(&self) -> usize {
        match self {
            GroupRows::Values(values) => values.len(),
            GroupRows::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One group as it should be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGroup<'a> {
    pub title: &'static str,
    /// `None` for the search results group
    pub section: Option<Section>,
    pub rows: GroupRows<'a>,
}

/// Snapshot of the display for one (index, sections, query) combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    groups: Vec<DisplayGroup<'a>>,
    searching: bool,
}

impl<'a> CatalogView<'a> {
    /// Work out every visible group and its rows
    pub fn derive(index: &'a CatalogIndex, sections: &SectionState, query: &str) -> Self {
        let query = SearchQuery::new(query);

        if query.is_active() {
            let results = filter_refs(index.records(), &query);

            return Self {
                groups: vec![DisplayGroup {
                    title: SEARCH_RESULTS_TITLE,
                    section: None,
                    rows: GroupRows::Records(results),
                }],
                searching: true,
            };
        }

        let groups = Section::ALL
            .into_iter()
            .map(|section| DisplayGroup {
                title: section.title(),
                section: Some(section),
                rows: section_rows(index, section, sections.is_expanded(section)),
            })
            .collect();

        Self {
            groups,
            searching: false,
        }
    }

    pub fn groups(&self) -> &[DisplayGroup<'a>] {
        &self.groups
    }

    /// One while searching, five otherwise
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Visible rows in a group; zero for a group that doesn't exist
    pub fn row_count(&self, group: usize) -> usize {
        self.groups.get(group).map_or(0, |g| g.rows.len())
    }

    /// Visible rows of a section. Zero while searching.
    pub fn section_row_count(&self, section: Section) -> usize {
        self.groups
            .iter()
            .find(|g| g.section == Some(section))
            .map_or(0, |g| g.rows.len())
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// The record behind a selected row.
    ///
    /// Value rows and out-of-range positions select nothing.
    pub fn record_at(&self, group: usize, row: usize) -> Option<&'a MovieRecord> {
        match &self.groups.get(group)?.rows {
            GroupRows::Records(records) => records.get(row).copied(),
            GroupRows::Values(_) => None,
        }
    }
}

fn section_rows(index: &CatalogIndex, section: Section, expanded: bool) -> GroupRows<'_> {
    match section.dimension() {
        Some(dimension) => {
            let mut values: Vec<&str> = if expanded {
                index.values(dimension).iter().map(String::as_str).collect()
            } else {
                Vec::new()
            };
            values.sort_unstable();
            GroupRows::Values(values)
        }
        None => {
            let records = if expanded {
                index.records().iter().collect()
            } else {
                Vec::new()
            };
            GroupRows::Records(records)
        }
    }
}
