//! Pipeline Evaluation Scorer
//!
//! Aggregates letter grades that reviewers assign to LLM-generated nanopore
//! metagenomics pipelines, one row per (model family, model version, step).
//!
//! Layout:
//! - `data`: scoring matrix loading with Polars
//! - `scorer`: letter → numeric tables, fully-correct and composite checks
//! - `catalog`: model families, chronological version catalog, step labels
//! - `aggregates/`: first-correct, step difficulty, failure modes, chart inputs
//! - `formatters/`: text, markdown and JSON summaries
//! - `charts/`: heatmap, radar, bar and line PNGs (plotters)
//!
//! The binaries under `src/bin/` wire these to the fixed project paths in
//! `config`.

pub mod aggregates;
pub mod catalog;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod scorer;

// Re-export commonly used types
pub use aggregates::{build_score_grid, version_trajectories, ScoreGrid, Summary};
pub use catalog::{ModelFamily, MODEL_CATALOG};
pub use config::{ChartConfig, ProjectPaths, RootArgs};
pub use data::{ScoreRow, ScoringMatrix};
pub use error::{EvalError, Result};
pub use formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
pub use scorer::{composite, is_row_fully_correct, is_row_fully_scored, score, Dimension};
