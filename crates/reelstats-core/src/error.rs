// crates/reelstats-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("source is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("source contained no movie records")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
