use anyhow::{anyhow, Context, Result};
use browse::{
    filter, CatalogView, GroupRows, MovieDetail, Section, SectionState, StarRating,
};
use catalog::{Catalog, CatalogIndex, MovieRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Movie Browser - browse a movie collection by year, genre, director and actor
#[derive(Parser)]
#[command(name = "movie-browser")]
#[command(about = "Browse and search a movie catalog", long_about = None)]
struct Cli {
    /// Path to the movie JSON payload
    #[arg(short, long, default_value = "data/movies.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the five browse sections
    Sections {
        /// Section to expand (year, genre, director, actor, all); repeatable
        #[arg(long, short)]
        expand: Vec<Section>,
    },

    /// Search title, year, genre, actors and director (case-insensitive substring match)
    Search {
        query: String,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail screen for one movie
    Show {
        /// Exact title, case-insensitive
        title: String,

        /// Your own star rating to display (1-5)
        #[arg(long)]
        stars: Option<u8>,
    },

    /// Print catalog statistics
    Stats,

    /// Interactive session: type to search, `:toggle <section>` to expand or collapse
    Interactive,
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data_file)
        .with_context(|| format!("Failed to load movie catalog from {}", cli.data_file.display()))?;
    tracing::info!("Loaded {} movies in {:?}", catalog.index().len(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Sections { expand } => handle_sections(catalog.index(), &expand),
        Commands::Search { query, json } => handle_search(catalog.index(), &query, json)?,
        Commands::Show { title, stars } => handle_show(catalog.index(), &title, stars)?,
        Commands::Stats => handle_stats(catalog.index()),
        Commands::Interactive => handle_interactive(catalog.index())?,
    }

    Ok(())
}

/// Handle the 'sections' command
fn handle_sections(index: &CatalogIndex, expand: &[Section]) {
    let mut sections = SectionState::new();
    for &section in expand {
        if !sections.is_expanded(section) {
            sections.toggle(section);
        }
    }
    print_view(&CatalogView::derive(index, &sections, ""));
}

/// Handle the 'search' command
fn handle_search(index: &CatalogIndex, query: &str, json: bool) -> Result<()> {
    if json {
        let matches = filter(index.records(), query);
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    print_view(&CatalogView::derive(index, &SectionState::new(), query));
    Ok(())
}

/// Handle the 'show' command
fn handle_show(index: &CatalogIndex, title: &str, stars: Option<u8>) -> Result<()> {
    let record = find_by_title(index, title).ok_or_else(|| anyhow!("Movie '{}' not found", title))?;

    let mut rating = StarRating::new();
    if let Some(stars) = stars {
        rating.tap(stars);
    }
    print_detail(&MovieDetail::from(record), &rating);
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(index: &CatalogIndex) {
    let (movies, years, genres, directors, actors) = index.counts();
    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Movies: {}", "• ".cyan(), movies);
    println!("{}Distinct years: {}", "• ".cyan(), years);
    println!("{}Distinct genres: {}", "• ".cyan(), genres);
    println!("{}Distinct directors: {}", "• ".cyan(), directors);
    println!("{}Distinct actors: {}", "• ".cyan(), actors);
}

/// Handle the 'interactive' command
///
/// Each input line is either a command starting with ':' or the new search
/// text. The view is re-derived after every line.
fn handle_interactive(index: &CatalogIndex) -> Result<()> {
    let mut sections = SectionState::new();
    let mut query = String::new();

    println!(
        "{}",
        "Type to search. Commands: :toggle <section>, :open <row>, :clear, :quit".dimmed()
    );
    print_view(&CatalogView::derive(index, &sections, &query));

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".green());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) | (":q", _) => break,
            (":clear", _) => query.clear(),
            (":toggle", name) | (":t", name) => match name.parse::<Section>() {
                Ok(section) => {
                    sections.toggle(section);
                }
                Err(err) => {
                    println!("{}", err.to_string().red());
                    continue;
                }
            },
            (":open", row) | (":o", row) => {
                let view = CatalogView::derive(index, &sections, &query);
                match open_row(&view, row) {
                    Some(record) => print_detail(&MovieDetail::from(record), &StarRating::new()),
                    None => println!("{}", format!("No movie at row '{}'", row).red()),
                }
                continue;
            }
            _ if line.starts_with(':') => {
                println!("{}", format!("Unknown command '{}'", line).red());
                continue;
            }
            _ => query = line.to_string(),
        }

        print_view(&CatalogView::derive(index, &sections, &query));
    }
    Ok(())
}

/// Resolve a 1-based row number against the record group on screen
fn open_row<'a>(view: &CatalogView<'a>, row: &str) -> Option<&'a MovieRecord> {
    let row: usize = row.trim().parse().ok()?;
    let group = view
        .groups()
        .iter()
        .position(|g| matches!(g.rows, GroupRows::Records(_)))?;
    view.record_at(group, row.checked_sub(1)?)
}

fn find_by_title<'a>(index: &'a CatalogIndex, title: &str) -> Option<&'a MovieRecord> {
    let wanted = title.to_lowercase();
    index
        .records()
        .iter()
        .find(|record| record.title.to_lowercase() == wanted)
}

/// Helper function to print every visible group
fn print_view(view: &CatalogView<'_>) {
    for group in view.groups() {
        println!(
            "{} {}",
            group.title.bold().blue(),
            format!("({})", group.rows.len()).dimmed()
        );
        match &group.rows {
            GroupRows::Values(values) => {
                for value in values {
                    println!("  {}{}", "• ".green(), value);
                }
            }
            GroupRows::Records(records) => {
                for (i, record) in records.iter().enumerate() {
                    println!(
                        "  {}. {} ({}) [{}] {}",
                        (i + 1).to_string().green(),
                        record.title,
                        record.year,
                        record.genre.join(", "),
                        record.language.dimmed()
                    );
                }
            }
        }
    }
}

/// Helper function to print the detail screen
fn print_detail(detail: &MovieDetail, rating: &StarRating) {
    println!("{} ({})", detail.title.bold().blue(), detail.year);
    println!("{}Genre: {}", "• ".green(), detail.genre_line);
    println!("{}Director: {}", "• ".green(), detail.director);
    println!("{}Actors: {}", "• ".green(), detail.actors_line);
    println!("{}Language: {}", "• ".green(), detail.language);
    if !detail.ratings_line.is_empty() {
        println!("{}Ratings: {}", "• ".cyan(), detail.ratings_line);
    }
    if let Some(url) = &detail.poster_url {
        println!("{}Poster: {}", "• ".cyan(), url);
    }
    let stars: String = rating
        .stars()
        .iter()
        .map(|&filled| if filled { '★' } else { '☆' })
        .collect();
    println!("{}Your rating: {}", "• ".cyan(), stars.yellow());
    println!();
    println!("{}", detail.plot);
}
