//! cinedex - TMDB movie catalog browser CLI.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use cinedex_api::catalog::MovieCatalog;
use cinedex_api::tmdb::{DEFAULT_LANGUAGE, TmdbClient};
use cinedex_api::view::MoviePage;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse the popular movie listing.
    Popular(PopularArgs),
    /// Search movies by title.
    Search(SearchArgs),
    /// Show one movie's detail record.
    Detail(DetailArgs),
}

/// Arguments for the `popular` subcommand.
#[derive(clap::Args)]
struct PopularArgs {
    /// Number of pages to fetch.
    #[arg(long, default_value_t = 1)]
    pages: u32,
    /// Response language (default: "ko-KR").
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "기생충").
    #[arg(long, required = true)]
    query: String,
    /// Number of pages to fetch.
    #[arg(long, default_value_t = 1)]
    pages: u32,
    /// Response language (default: "ko-KR").
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

/// Arguments for the `detail` subcommand.
#[derive(clap::Args)]
struct DetailArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: String,
    /// Response language (default: "ko-KR").
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
}

/// Builds a `MovieCatalog` from the `TMDB_API_TOKEN` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_TOKEN` is not set or the client fails to
/// build.
#[instrument(skip_all)]
fn build_catalog(language: &str) -> Result<MovieCatalog<TmdbClient>> {
    let api_token = std::env::var("TMDB_API_TOKEN")
        .context("TMDB_API_TOKEN environment variable is required")?;

    let client = TmdbClient::builder()
        .api_token(api_token)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")?;

    Ok(MovieCatalog::new(Arc::new(client)).language(language))
}

/// Prints one page of summaries in tabular form.
fn print_page(page_no: u32, page: &MoviePage) {
    tracing::info!("--- page {} ---", page_no);
    tracing::info!("ID\tRating\tTitle");
    for summary in &page.summaries {
        tracing::info!("{}\t{:.1}\t{}", summary.id, summary.rating, summary.title);
    }
}

/// Runs the `popular` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or a page fetch fails.
#[instrument(skip_all)]
async fn run_popular(args: &PopularArgs) -> Result<()> {
    let catalog = build_catalog(&args.language)?;
    let mut pager = catalog.popular_pager();

    for page_no in 1..=args.pages {
        let page = pager
            .next_page()
            .await
            .context("TMDB movie/popular request failed")?;
        print_page(page_no, &page);
        if page.is_last_page {
            tracing::info!("Last page reached");
            break;
        }
    }

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or a page fetch fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs) -> Result<()> {
    let catalog = build_catalog(&args.language)?;
    let mut pager = catalog.search_pager(args.query.as_str());

    for page_no in 1..=args.pages {
        let page = pager
            .next_page()
            .await
            .context("TMDB search/movie request failed")?;
        print_page(page_no, &page);
        if page.is_last_page {
            tracing::info!("Last page reached");
            break;
        }
    }

    Ok(())
}

/// Runs the `detail` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_detail(args: &DetailArgs) -> Result<()> {
    let catalog = build_catalog(&args.language)?;

    let detail = catalog
        .movie_detail(&args.id)
        .await
        .context("TMDB movie detail request failed")?;

    tracing::info!("Title: {}", detail.title);
    tracing::info!("Rating: {:.1}", detail.rating);
    tracing::info!("Genres: {}", detail.genres.join(", "));
    tracing::info!("Poster: {}", detail.poster_url);
    tracing::info!(
        "Description: {}",
        detail.description.as_deref().unwrap_or("-")
    );

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Popular(args) => run_popular(&args).await,
        Commands::Search(args) => run_search(&args).await,
        Commands::Detail(args) => run_detail(&args).await,
    }
}
