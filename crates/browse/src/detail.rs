//! Detail projection for a single selected movie.
//!
//! Pure formatting, no lookups: everything comes from the record itself.

use catalog::MovieRecord;

/// Separator used when joining multi-valued fields for display
const JOIN: &str = ", ";

/// Display-ready fields of one movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub director: String,
    pub language: String,
    pub plot: String,
    /// e.g. "Animation, Adventure"
    pub genre_line: String,
    pub actors_line: String,
    /// e.g. "Internet Movie Database: 8.3/10, Metacritic: 88/100"
    pub ratings_line: String,
    /// Only set when the poster is a usable http(s) URL
    pub poster_url: Option<String>,
}

impl From<&MovieRecord> for MovieDetail {
    fn from(record: &MovieRecord) -> Self {
        let ratings_line = record
            .ratings
            .iter()
            .map(|rating| format!("{}: {}", rating.source, rating.value))
            .collect::<Vec<_>>()
            .join(JOIN);

        Self {
            title: record.title.clone(),
            year: record.year.clone(),
            director: record.director.clone(),
            language: record.language.clone(),
            plot: record.plot.clone(),
            genre_line: record.genre.join(JOIN),
            actors_line: record.actors.join(JOIN),
            ratings_line,
            poster_url: record.poster_url().map(str::to_string),
        }
    }
}
