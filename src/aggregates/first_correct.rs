//! First Fully Correct Version per Family
//!
//! For each family, walks its versions in table-encounter order and stops at
//! the first version whose every row is fully scored and fully correct.

use crate::catalog::ModelFamily;
use crate::data::ScoringMatrix;
use crate::scorer::{is_row_fully_correct, is_row_fully_scored};
use serde::Serialize;

/// Answer for one family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyVerdict {
    pub family: ModelFamily,
    /// None when no version qualifies
    pub first_correct_version: Option<String>,
}

/// Find the first version per family with every step fully correct
///
/// Families appear in order of first appearance in the matrix. A version with
/// no rows never qualifies.
pub fn first_fully_correct(matrix: &ScoringMatrix) -> Vec<FamilyVerdict> {
    matrix
        .families()
        .into_iter()
        .map(|family| {
            let first_correct_version = matrix
                .versions_of(family)
                .into_iter()
                .find(|version| version_is_fully_correct(matrix, family, version))
                .map(str::to_string);

            FamilyVerdict { family, first_correct_version }
        })
        .collect()
}

fn version_is_fully_correct(matrix: &ScoringMatrix, family: ModelFamily, version: &str) -> bool {
    let mut rows = matrix.rows_for_version(family, version).peekable();
    if rows.peek().is_none() {
        return false;
    }
    rows.all(|row| is_row_fully_scored(row) && is_row_fully_correct(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScoreRow;

    const PERFECT: [&str; 5] = ["C", "C", "P", "S", "R"];

    fn row(family: ModelFamily, version: &str, step: u32, grades: [&str; 5]) -> ScoreRow {
        ScoreRow::new(family, version, step, format!("step {step}"), grades)
    }

    #[test]
    fn test_incomplete_version_does_not_qualify() {
        let matrix = ScoringMatrix::new(vec![
            row(ModelFamily::OpenAi, "v1", 1, PERFECT),
            row(ModelFamily::OpenAi, "v1", 2, ["C", "C", "P", "", "R"]),
        ]);
        let verdicts = first_fully_correct(&matrix);
        assert_eq!(
            verdicts,
            vec![FamilyVerdict { family: ModelFamily::OpenAi, first_correct_version: None }]
        );
    }

    #[test]
    fn test_first_qualifying_version_in_encounter_order() {
        // "o1" is listed before "gpt4o" in the table, so it wins even though
        // gpt4o is chronologically older
        let matrix = ScoringMatrix::new(vec![
            row(ModelFamily::OpenAi, "o3_mini", 1, ["C", "A", "P", "S", "R"]),
            row(ModelFamily::OpenAi, "o1", 1, PERFECT),
            row(ModelFamily::OpenAi, "gpt4o", 1, PERFECT),
            row(ModelFamily::OpenAi, "o1", 2, PERFECT),
            row(ModelFamily::OpenAi, "gpt4o", 2, PERFECT),
        ]);
        let verdicts = first_fully_correct(&matrix);
        assert_eq!(verdicts[0].first_correct_version.as_deref(), Some("o1"));
    }

    #[test]
    fn test_families_in_first_appearance_order() {
        let matrix = ScoringMatrix::new(vec![
            row(ModelFamily::Gemini, "3_pro", 1, PERFECT),
            row(ModelFamily::Claude, "sonnet_4", 1, ["C", "C", "F", "S", "R"]),
            row(ModelFamily::OpenAi, "gpt5", 1, ["c", "c", "p", "s", "r"]),
        ]);
        let verdicts = first_fully_correct(&matrix);
        let families: Vec<_> = verdicts.iter().map(|v| v.family).collect();
        assert_eq!(families, vec![ModelFamily::Gemini, ModelFamily::Claude, ModelFamily::OpenAi]);
        assert_eq!(verdicts[0].first_correct_version.as_deref(), Some("3_pro"));
        assert_eq!(verdicts[1].first_correct_version, None);
        // Lowercase grades still count as correct
        assert_eq!(verdicts[2].first_correct_version.as_deref(), Some("gpt5"));
    }

    #[test]
    fn test_unscored_rows_never_qualify() {
        let matrix = ScoringMatrix::new(vec![row(ModelFamily::Claude, "opus_4.6", 1, [""; 5])]);
        assert_eq!(first_fully_correct(&matrix)[0].first_correct_version, None);
    }

    #[test]
    fn test_empty_matrix() {
        assert!(first_fully_correct(&ScoringMatrix::default()).is_empty());
    }
}
