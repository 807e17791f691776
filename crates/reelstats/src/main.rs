// crates/reelstats/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;

const DEFAULT_DATABASE_URL: &str = "sqlite:movies.db";

#[derive(Parser, Debug)]
#[command(author, version, about = "Movie metadata report CLI", long_about = None)]
struct Cli {
    /// Path to the movie metadata CSV export.
    #[arg(long, default_value = "movie_metadata.csv")]
    csv: PathBuf,

    /// Cache database URL. Falls back to REELSTATS_DATABASE_URL, then to
    /// a movies.db file in the working directory.
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let database_url = cli
        .database
        .or_else(|| std::env::var("REELSTATS_DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    println!("Initializing...");

    let records = reelstats_core::loader::load_movie_records(&cli.csv)
        .with_context(|| format!("failed to load {}", cli.csv.display()))?;

    // The cache is rebuilt from scratch on every start; the reports then run
    // off what the table holds, never off the parse pass directly.
    let pool = reelstats_core::store::connect(&database_url)
        .await
        .with_context(|| format!("failed to open cache database {database_url}"))?;
    reelstats_core::store::rebuild_cache(&pool, &records)
        .await
        .context("failed to rebuild the movie_metadata cache")?;
    let records = reelstats_core::store::fetch_all(&pool)
        .await
        .context("failed to read movie records back from the cache")?;
    pool.close().await;

    info!(records = records.len(), "cache ready, entering menu loop");

    menu::run_loop(&records)
}
