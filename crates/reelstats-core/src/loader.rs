use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::error::{PipelineError, Result};
use crate::model::MovieRecord;

/// Reads the movie-metadata CSV into memory.
///
/// The source must carry the named header columns the reports depend on;
/// any other columns are ignored. Fails when the file is unreadable, a
/// required column is missing, or the file holds no data rows — in every
/// one of those cases the caller never hands a record set to the reports.
pub fn load_movie_records(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndexes::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(record_from_row(&row, &columns));
    }

    if records.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    info!(
        records = records.len(),
        source = %path.display(),
        "loaded movie metadata"
    );
    Ok(records)
}

/// Positions of the required columns within the source header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    genres: usize,
    actor: usize,
    director: usize,
    gross: usize,
    budget: usize,
    imdb_score: usize,
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            genres: find_column(headers, "genres")?,
            actor: find_column(headers, "actor_1_name")?,
            director: find_column(headers, "director_name")?,
            gross: find_column(headers, "gross")?,
            budget: find_column(headers, "budget")?,
            imdb_score: find_column(headers, "imdb_score")?,
        })
    }
}

fn find_column(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(PipelineError::MissingColumn(name))
}

fn record_from_row(row: &StringRecord, columns: &ColumnIndexes) -> MovieRecord {
    MovieRecord {
        genres: split_genres(row.get(columns.genres).unwrap_or_default()),
        lead_actor: clean_optional(row.get(columns.actor)),
        director: clean_optional(row.get(columns.director)),
        gross: parse_optional_i64(row.get(columns.gross)),
        budget: parse_optional_i64(row.get(columns.budget)),
        imdb_score: parse_optional_f64(row.get(columns.imdb_score)),
    }
}

/// Splits the `|`-delimited genre list, dropping blank tokens so a malformed
/// field yields no group keys rather than an empty-string key.
pub(crate) fn split_genres(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_optional_i64(value: Option<&str>) -> Option<i64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    // Sources exported through pandas leave integer columns as floats.
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
}

fn parse_optional_f64(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
