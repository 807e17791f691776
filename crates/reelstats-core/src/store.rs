// crates/reelstats-core/src/store.rs

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::error::Result;
use crate::model::MovieRecord;

/// Opens the cache database, creating the file when it does not exist yet.
///
/// The pool is capped at a single connection: an in-memory database lives
/// and dies with its connection, so a second connection would see an empty
/// schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Drops and repopulates the `movie_metadata` table from the parsed records.
///
/// The cache is disposable: every run starts from the CSV, so the previous
/// contents are discarded wholesale inside one transaction.
pub async fn rebuild_cache(pool: &SqlitePool, records: &[MovieRecord]) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DROP TABLE IF EXISTS movie_metadata")
        .execute(tx.as_mut())
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE movie_metadata (
            genres TEXT NOT NULL,
            actor_1_name TEXT,
            director_name TEXT,
            gross INTEGER,
            budget INTEGER,
            imdb_score REAL
        )
        "#,
    )
    .execute(tx.as_mut())
    .await?;

    for record in records {
        sqlx::query(
            "INSERT INTO movie_metadata (genres, actor_1_name, director_name, gross, budget, imdb_score) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.genres.join("|"))
        .bind(&record.lead_actor)
        .bind(&record.director)
        .bind(record.gross)
        .bind(record.budget)
        .bind(record.imdb_score)
        .execute(tx.as_mut())
        .await?;
    }

    tx.commit().await?;

    info!(records = records.len(), "rebuilt movie_metadata cache");
    Ok(())
}

/// Reads every cached record back in insertion order.
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<MovieRecord>> {
    let rows: Vec<MovieRow> = sqlx::query_as(
        "SELECT genres, actor_1_name, director_name, gross, budget, imdb_score \
         FROM movie_metadata ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(MovieRecord::from).collect())
}

#[derive(Debug, FromRow)]
struct MovieRow {
    genres: String,
    actor_1_name: Option<String>,
    director_name: Option<String>,
    gross: Option<i64>,
    budget: Option<i64>,
    imdb_score: Option<f64>,
}

impl From<MovieRow> for MovieRecord {
    fn from(row: MovieRow) -> Self {
        MovieRecord {
            genres: crate::loader::split_genres(&row.genres),
            lead_actor: row.actor_1_name,
            director: row.director_name,
            gross: row.gross,
            budget: row.budget,
            imdb_score: row.imdb_score,
        }
    }
}
