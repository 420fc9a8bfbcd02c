//! Error taxonomy for loading and rendering evaluation scores
//!
//! Unmapped grade letters have no variant here: the scoring layer treats them
//! as missing data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    /// Scoring matrix path does not exist
    #[error("{} not found.", .0.display())]
    MissingInputFile(PathBuf),

    #[error("required column '{0}' is missing from the scoring matrix")]
    MissingColumn(String),

    #[error("row {row}: step_number '{value}' is not an integer")]
    InvalidStepNumber { row: usize, value: String },

    #[error("row {row}: unknown model_family '{value}' (expected openai, claude or gemini)")]
    UnknownFamily { row: usize, value: String },

    #[error("failed to read scoring matrix: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialise summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render chart {path}: {message}")]
    Chart { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, EvalError>;
