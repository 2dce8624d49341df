//! Integration tests for browsing.
//!
//! These tests drive a catalog the way a display would: load a payload,
//! toggle sections, type into the search box, and open a movie.

use browse::{filter, CatalogView, GroupRows, MovieDetail, Section, SectionState};
use catalog::{Catalog, Dimension};

const PAYLOAD: &str = r#"[
    {
        "Title": "Up",
        "Year": "2009",
        "Genre": "Animation, Adventure",
        "Director": "Pete Docter",
        "Actors": "Ed Asner, Jordan Nagai",
        "Plot": "A widower ties thousands of balloons to his house.",
        "Language": "English",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "8.3/10"},
            {"Source": "Rotten Tomatoes", "Value": "98%"}
        ],
        "Poster": "https://example.com/up.jpg"
    },
    {
        "Title": "Cars",
        "Year": "2006",
        "Genre": "Animation, Comedy",
        "Director": "John Lasseter, Joe Ranft",
        "Actors": "Owen Wilson, Paul Newman",
        "Plot": "A race car gets stranded in a small town.",
        "Language": "English",
        "Ratings": []
    },
    {
        "Title": "Game of Thrones",
        "Year": "2011–2019",
        "Genre": "Action, Adventure, Drama",
        "Director": "N/A",
        "Actors": "Emilia Clarke, Peter Dinklage",
        "Plot": "Noble families fight for the Iron Throne.",
        "Language": "English",
        "Ratings": [{"Source": "Internet Movie Database", "Value": "9.2/10"}],
        "Poster": "N/A"
    }
]"#;

fn load() -> Catalog {
    Catalog::from_payload(PAYLOAD.as_bytes()).unwrap()
}

#[test]
fn test_browse_session() {
    let catalog = load();
    let index = catalog.index();
    let mut sections = SectionState::new();

    // Nothing visible until something is expanded
    let view = CatalogView::derive(index, &sections, "");
    assert_eq!(view.group_count(), 5);
    assert!((0..5).all(|g| view.row_count(g) == 0));

    sections.toggle(Section::Genre);
    let view = CatalogView::derive(index, &sections, "");
    assert_eq!(
        view.section_row_count(Section::Genre),
        index.values(Dimension::Genre).len()
    );
    assert_eq!(view.section_row_count(Section::Genre), 5);
    assert_eq!(view.section_row_count(Section::Actor), 0);

    // Typing a query collapses the view into one list
    let view = CatalogView::derive(index, &sections, "pete");
    assert_eq!(view.group_count(), 1);
    let titles: Vec<&str> = match &view.groups()[0].rows {
        GroupRows::Records(records) => records.iter().map(|r| r.title.as_str()).collect(),
        GroupRows::Values(_) => panic!("search results should be records"),
    };
    // Pete Docter directs Up, Peter Dinklage acts in Game of Thrones
    assert_eq!(titles, vec!["Up", "Game of Thrones"]);

    // Clearing the query brings back the sections as they were
    let view = CatalogView::derive(index, &sections, "");
    assert_eq!(view.group_count(), 5);
    assert_eq!(view.section_row_count(Section::Genre), 5);
}

#[test]
fn test_director_is_one_opaque_value() {
    let catalog = load();
    let directors = catalog.index().values(Dimension::Director);

    assert!(directors.contains("John Lasseter, Joe Ranft"));
    assert!(!directors.contains("Joe Ranft"));

    // Still found by substring search
    let hits = filter(catalog.index().records(), "ranft");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Cars");
}

#[test]
fn test_series_year_is_kept_as_text() {
    let catalog = load();
    assert!(catalog.index().values(Dimension::Year).contains("2011–2019"));

    let hits = filter(catalog.index().records(), "2019");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Game of Thrones");
}

#[test]
fn test_select_and_open_detail() {
    let catalog = load();
    let mut sections = SectionState::new();
    sections.toggle(Section::AllMovies);

    let view = CatalogView::derive(catalog.index(), &sections, "");
    let selected = view.record_at(4, 2).expect("third movie should be selectable");
    let detail = MovieDetail::from(selected);

    assert_eq!(detail.title, "Game of Thrones");
    assert_eq!(detail.genre_line, "Action, Adventure, Drama");
    assert_eq!(detail.ratings_line, "Internet Movie Database: 9.2/10");
    assert_eq!(detail.poster_url, None);

    let up = MovieDetail::from(view.record_at(4, 0).unwrap());
    assert_eq!(up.poster_url.as_deref(), Some("https://example.com/up.jpg"));
}

#[test]
fn test_reload_swaps_records_and_index_together() {
    let mut catalog = load();
    let old = catalog.snapshot();

    catalog
        .reload(
            br#"[{"Title": "Heat", "Year": "1995", "Genre": "Crime, Drama",
                  "Director": "Michael Mann", "Actors": "Al Pacino, Robert De Niro",
                  "Plot": "", "Language": "English", "Ratings": []}]"#,
        )
        .unwrap();

    let new = catalog.snapshot();
    assert_eq!(old.len(), 3);
    assert_eq!(old.values(Dimension::Genre).len(), 5);
    assert_eq!(new.len(), 1);
    assert_eq!(new.sorted_values(Dimension::Genre), vec!["Crime", "Drama"]);
}

#[test]
fn test_bad_payload_shows_empty_catalog() {
    let catalog = Catalog::from_payload_or_empty(b"not json");
    let view = CatalogView::derive(catalog.index(), &SectionState::new(), "up");
    assert_eq!(view.group_count(), 1);
    assert_eq!(view.row_count(0), 0);
}
