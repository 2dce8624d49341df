//! Expand/collapse state for the browse sections.
//!
//! The display has five sections: one per dimension plus "All Movies".
//! Every section starts collapsed and only changes when it is toggled.

use crate::search::SearchQuery;
use catalog::{CatalogIndex, Dimension};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One display section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Year,
    Genre,
    Director,
    Actor,
    AllMovies,
}

impl Section {
    /// All sections, in display order
    pub const ALL: [Section; 5] = [
        Section::Year,
        Section::Genre,
        Section::Director,
        Section::Actor,
        Section::AllMovies,
    ];

    /// Header text shown above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Year => "Year",
            Section::Genre => "Genre",
            Section::Director => "Directors",
            Section::Actor => "Actors",
            Section::AllMovies => "All Movies",
        }
    }

    /// The index dimension behind this section; `None` for "All Movies"
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Section::Year => Some(Dimension::Year),
            Section::Genre => Some(Dimension::Genre),
            Section::Director => Some(Dimension::Director),
            Section::Actor => Some(Dimension::Actor),
            Section::AllMovies => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Returned when a section name isn't recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section '{0}' (expected year, genre, director, actor or all)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" | "years" => Ok(Section::Year),
            "genre" | "genres" => Ok(Section::Genre),
            "director" | "directors" => Ok(Section::Director),
            "actor" | "actors" => Ok(Section::Actor),
            "all" | "movies" | "all-movies" | "all movies" => Ok(Section::AllMovies),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

/// Which sections are currently expanded.
///
/// Owned by whoever drives the display and passed into the view
/// derivation; it is never shared or read from a global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    expanded: HashSet<Section>,
}

impl SectionState {
    /// All sections collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one section. Returns true if it is now expanded.
    pub fn toggle(&mut self, section: Section) -> bool {
        let now_expanded = if self.expanded.remove(&section) {
            false
        } else {
            self.expanded.insert(section);
            true
        };
        tracing::debug!(
            "{} section {}",
            if now_expanded { "Expanded" } else { "Collapsed" },
            section
        );
        now_expanded
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.contains(&section)
    }

    /// Expanded sections in display order
    pub fn expanded(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(move |section| self.expanded.contains(section))
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Rows a section shows when no search is running.
    ///
    /// Collapsed sections show nothing; expanded ones show every distinct
    /// value of their dimension, or every record for "All Movies".
    pub fn row_count(&self, index: &CatalogIndex, section: Section) -> usize {
        if !self.is_expanded(section) {
            return 0;
        }
        index.query(section.dimension()).len()
    }
}

/// Rows a section shows for the current search text.
///
/// While a search is active the sections are replaced by the results list,
/// so every section shows zero rows whatever its expanded state.
pub fn visible_row_count(
    index: &CatalogIndex,
    sections: &SectionState,
    query: &str,
    section: Section,
) -> usize {
    if SearchQuery::new(query).is_active() {
        return 0;
    }
    sections.row_count(index, section)
}
