//! Dimension Scorer
//!
//! Converts the five categorical grades recorded for each (model, step) row
//! into numbers and decides whether a row is fully scored, fully correct, and
//! what its composite score is.
//!
//! Grade tables are not uniform: output compatibility is pass/fail only while
//! the other four dimensions have a partial grade worth 0.5.

use crate::data::ScoreRow;
use serde::Serialize;
use std::fmt;

/// Number of scored dimensions per row
pub const DIMENSION_COUNT: usize = 5;

/// One fixed evaluation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ToolSelection,
    ParameterAccuracy,
    OutputCompatibility,
    ScientificValidity,
    Executability,
}

/// Grade letter and its numeric score
type GradeTable = &'static [(&'static str, f64)];

static TOOL_SELECTION: GradeTable = &[("C", 1.0), ("A", 0.5), ("I", 0.0)];
static PARAMETER_ACCURACY: GradeTable = &[("C", 1.0), ("P", 0.5), ("I", 0.0)];
static OUTPUT_COMPATIBILITY: GradeTable = &[("P", 1.0), ("F", 0.0)];
static SCIENTIFIC_VALIDITY: GradeTable = &[("S", 1.0), ("Q", 0.5), ("I", 0.0)];
static EXECUTABILITY: GradeTable = &[("R", 1.0), ("M", 0.5), ("N", 0.0)];

impl Dimension {
    /// Column order of the scoring matrix
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::ToolSelection,
        Dimension::ParameterAccuracy,
        Dimension::OutputCompatibility,
        Dimension::ScientificValidity,
        Dimension::Executability,
    ];

    /// Position in `ALL` and in `ScoreRow::grades`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header name in the scoring matrix CSV
    pub fn column_name(self) -> &'static str {
        match self {
            Dimension::ToolSelection => "tool_selection",
            Dimension::ParameterAccuracy => "parameter_accuracy",
            Dimension::OutputCompatibility => "output_compatibility",
            Dimension::ScientificValidity => "scientific_validity",
            Dimension::Executability => "executability",
        }
    }

    /// Axis label for charts
    pub fn label(self) -> &'static str {
        match self {
            Dimension::ToolSelection => "Tool Selection",
            Dimension::ParameterAccuracy => "Parameter Accuracy",
            Dimension::OutputCompatibility => "Output Compat.",
            Dimension::ScientificValidity => "Scientific Validity",
            Dimension::Executability => "Executability",
        }
    }

    /// The grade that counts as fully correct on this axis
    pub fn correct_letter(self) -> &'static str {
        match self {
            Dimension::ToolSelection => "C",
            Dimension::ParameterAccuracy => "C",
            Dimension::OutputCompatibility => "P",
            Dimension::ScientificValidity => "S",
            Dimension::Executability => "R",
        }
    }

    fn table(self) -> GradeTable {
        match self {
            Dimension::ToolSelection => TOOL_SELECTION,
            Dimension::ParameterAccuracy => PARAMETER_ACCURACY,
            Dimension::OutputCompatibility => OUTPUT_COMPATIBILITY,
            Dimension::ScientificValidity => SCIENTIFIC_VALIDITY,
            Dimension::Executability => EXECUTABILITY,
        }
    }

    /// Valid grade letters, best first
    pub fn alphabet(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().map(|(letter, _)| *letter)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Convert a grade letter to its numeric score
///
/// # Rating Scale
/// - Fully correct letter = 1.0
/// - Partial letter (where the dimension has one) = 0.5
/// - Incorrect letter = 0.0
/// - Empty / out-of-alphabet = None
///
/// Letters are compared case-insensitively after trimming.
pub fn score(dimension: Dimension, letter: &str) -> Option<f64> {
    let letter = letter.trim();
    dimension
        .table()
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(letter))
        .map(|(_, value)| *value)
}

/// True when every dimension has a non-empty grade
///
/// Grades outside the alphabet still count as scored here; they only make
/// the composite undefined.
pub fn is_row_fully_scored(row: &ScoreRow) -> bool {
    Dimension::ALL.iter().all(|&dim| !row.grade(dim).is_empty())
}

/// True when every dimension carries its fully correct letter
pub fn is_row_fully_correct(row: &ScoreRow) -> bool {
    Dimension::ALL
        .iter()
        .all(|&dim| row.grade(dim).eq_ignore_ascii_case(dim.correct_letter()))
}

/// Numeric scores of all five dimensions, or None if any is missing/unmapped
pub fn dimension_scores(row: &ScoreRow) -> Option<[f64; DIMENSION_COUNT]> {
    let mut values = [0.0; DIMENSION_COUNT];
    for dim in Dimension::ALL {
        let grade = row.grade(dim);
        if grade.is_empty() {
            return None;
        }
        match score(dim, grade) {
            Some(value) => values[dim.index()] = value,
            None => {
                tracing::debug!(
                    family = %row.model_family,
                    version = %row.model_version,
                    step = row.step_number,
                    dimension = %dim,
                    grade,
                    "unmapped grade treated as missing"
                );
                return None;
            }
        }
    }
    Some(values)
}

/// Mean of the five mapped dimension scores
///
/// Undefined when any dimension is empty or unmapped; never treated as zero.
pub fn composite(row: &ScoreRow) -> Option<f64> {
    dimension_scores(row).map(|values| values.iter().sum::<f64>() / DIMENSION_COUNT as f64)
}
