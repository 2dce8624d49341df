//! Browsing and search on top of a loaded catalog.
//!
//! This crate provides:
//! - SearchQuery and `filter` for the live, case-insensitive search
//! - Section and SectionState for expand/collapse
//! - CatalogView, which combines the two into the groups to display
//! - MovieDetail and StarRating for the single-movie screen
//!
//! ## Example Usage
//! ```ignore
//! use browse::{CatalogView, Section, SectionState};
//!
//! let mut sections = SectionState::new();
//! sections.toggle(Section::Genre);
//!
//! let view = CatalogView::derive(catalog.index(), &sections, "");
//! for group in view.groups() {
//!     println!("{} ({} rows)", group.title, group.rows.len());
//! }
//! ```

pub mod detail;
pub mod search;
pub mod sections;
pub mod star_rating;
pub mod view;

// Re-export main types
pub use detail::MovieDetail;
pub use search::{filter, filter_refs, SearchQuery};
pub use sections::{visible_row_count, Section, SectionState, UnknownSection};
pub use star_rating::{StarRating, MAX_STARS};
pub use view::{CatalogView, DisplayGroup, GroupRows, SEARCH_RESULTS_TITLE};
