//! Step Difficulty Ranking
//!
//! Averages the composite score of every row for a pipeline step (any model)
//! and ranks steps from hardest (lowest average) to easiest.

use crate::data::ScoringMatrix;
use crate::scorer::composite;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDifficulty {
    pub step_number: u32,
    /// Name from the first row seen for this step
    pub step_name: String,
    /// None when no row of the step has a composite score
    pub average: Option<f64>,
    /// Rows that contributed a composite
    pub scored_rows: usize,
}

/// Mean composite per step in ascending step order (unranked)
pub fn step_averages(matrix: &ScoringMatrix) -> Vec<StepDifficulty> {
    matrix
        .step_numbers()
        .into_iter()
        .map(|step| {
            let mut rows = matrix.rows_for_step(step).peekable();
            let step_name = rows
                .peek()
                .map(|r| r.step_name.clone())
                .unwrap_or_else(|| "unknown".to_string());

            let composites: Vec<f64> = rows.filter_map(composite).collect();
            let average = if composites.is_empty() {
                None
            } else {
                Some(composites.iter().sum::<f64>() / composites.len() as f64)
            };

            StepDifficulty {
                step_number: step,
                step_name,
                average,
                scored_rows: composites.len(),
            }
        })
        .collect()
}

/// Steps sorted by ascending average; steps without data sort last
///
/// The sort is stable, so equal averages keep ascending step order.
pub fn rank_step_difficulty(matrix: &ScoringMatrix) -> Vec<StepDifficulty> {
    let mut steps = step_averages(matrix);
    steps.sort_by(|a, b| compare_averages(a.average, b.average));
    steps
}

fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
