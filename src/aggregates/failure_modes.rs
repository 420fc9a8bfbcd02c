//! Common Failure Modes
//!
//! For every step and dimension, finds the most frequent grade that is not
//! the fully correct one. Ties go to the grade seen first.

use crate::data::ScoringMatrix;
use crate::scorer::Dimension;
use serde::Serialize;

/// Upper-cased missing marker that may survive as text in malformed cells
const MISSING_TOKEN: &str = "NAN";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureMode {
    pub dimension: Dimension,
    pub letter: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepFailures {
    pub step_number: u32,
    /// Dimensions with at least one failing grade, in dimension order
    pub modes: Vec<FailureMode>,
}

/// Most common non-correct grade per dimension, for each step ascending
///
/// (step, dimension) pairs without failing grades are omitted; a step with
/// none at all is still listed with an empty `modes`.
pub fn common_failures_per_step(matrix: &ScoringMatrix) -> Vec<StepFailures> {
    matrix
        .step_numbers()
        .into_iter()
        .map(|step| {
            let modes = Dimension::ALL
                .iter()
                .filter_map(|&dim| {
                    let failures = matrix
                        .rows_for_step(step)
                        .map(|row| row.grade(dim).to_ascii_uppercase())
                        .filter(|g| is_failure(dim, g));
                    most_common(failures).map(|(letter, count)| FailureMode {
                        dimension: dim,
                        letter,
                        count,
                    })
                })
                .collect();

            StepFailures { step_number: step, modes }
        })
        .collect()
}

fn is_failure(dimension: Dimension, grade: &str) -> bool {
    !grade.is_empty() && grade != dimension.correct_letter() && grade != MISSING_TOKEN
}

/// Most frequent value with its count; ties resolved by first occurrence
fn most_common(values: impl Iterator<Item = String>) -> Option<(String, usize)> {
    // Insertion-ordered tally; alphabets have at most three letters
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (value, n) in counts {
        if best.as_ref().map_or(true, |(_, top)| n > *top) {
            best = Some((value, n));
        }
    }
    best
}
