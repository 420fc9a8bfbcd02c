//! Models × steps composite grid used by the heatmap
//!
//! Rows follow `MODEL_CATALOG`; columns are the distinct steps of the matrix.
//! Cells without a composite stay `None` so they render as "not evaluated"
//! rather than as a zero score.

use crate::catalog::{self, ModelFamily, MODEL_CATALOG};
use crate::data::ScoringMatrix;
use crate::scorer::composite;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub family: ModelFamily,
    pub version: &'static str,
    pub label: &'static str,
    pub cells: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    pub steps: Vec<u32>,
    pub step_labels: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl ScoreGrid {
    /// True when no cell holds a score
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| r.cells.iter().all(Option::is_none))
    }

    /// Contiguous (family, first_row, last_row) blocks, top to bottom
    pub fn family_spans(&self) -> Vec<(ModelFamily, usize, usize)> {
        let mut spans: Vec<(ModelFamily, usize, usize)> = Vec::new();
        for (idx, row) in self.rows.iter().enumerate() {
            match spans.last_mut() {
                Some((family, _, end)) if *family == row.family => *end = idx,
                _ => spans.push((row.family, idx, idx)),
            }
        }
        spans
    }
}

/// Build the heatmap grid
///
/// When the matrix has no rows the seven canonical steps are used so an
/// empty template can still be drawn.
pub fn build_score_grid(matrix: &ScoringMatrix) -> ScoreGrid {
    let mut steps = matrix.step_numbers();
    if steps.is_empty() {
        steps = catalog::known_steps().collect();
    }

    let step_labels = steps
        .iter()
        .map(|&step| {
            catalog::step_label(step)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Step {step}"))
        })
        .collect();

    let mut rows: Vec<GridRow> = MODEL_CATALOG
        .iter()
        .map(|entry| GridRow {
            family: entry.family,
            version: entry.version,
            label: entry.label,
            cells: vec![None; steps.len()],
        })
        .collect();

    let catalog_index: FxHashMap<(ModelFamily, &str), usize> = MODEL_CATALOG
        .iter()
        .enumerate()
        .map(|(idx, e)| ((e.family, e.version), idx))
        .collect();

    for row in matrix.rows() {
        let Some(&grid_idx) = catalog_index.get(&(row.model_family, row.model_version.as_str())) else {
            tracing::warn!(
                family = %row.model_family,
                version = %row.model_version,
                "version not in model catalog, left out of heatmap"
            );
            continue;
        };
        // steps is derived from the same rows, so the lookup always succeeds
        let Some(step_idx) = steps.iter().position(|&s| s == row.step_number) else {
            continue;
        };
        // A later duplicate with a score overwrites an earlier one
        if let Some(value) = composite(row) {
            rows[grid_idx].cells[step_idx] = Some(value);
        }
    }

    ScoreGrid { steps, step_labels, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScoreRow;

    #[test]
    fn test_grid_follows_catalog_and_steps() {
        let matrix = ScoringMatrix::new(vec![
            ScoreRow::new(ModelFamily::Gemini, "3_flash", 2, "QC", ["C", "C", "P", "S", "R"]),
            ScoreRow::new(ModelFamily::OpenAi, "gpt4o", 4, "Taxonomy", ["I", "I", "F", "I", "N"]),
            ScoreRow::new(ModelFamily::OpenAi, "gpt4o", 2, "QC", ["C", "", "P", "S", "R"]),
        ]);
        let grid = build_score_grid(&matrix);

        assert_eq!(grid.steps, vec![2, 4]);
        assert_eq!(grid.step_labels, vec!["QC", "Taxonomy"]);
        assert_eq!(grid.rows.len(), MODEL_CATALOG.len());

        let gpt4o = &grid.rows[0];
        assert_eq!(gpt4o.label, "GPT-4o");
        assert_eq!(gpt4o.cells, vec![None, Some(0.0)]);

        let flash = grid.rows.last().unwrap();
        assert_eq!(flash.version, "3_flash");
        assert_eq!(flash.cells, vec![Some(1.0), None]);
        assert!(!grid.is_blank());
    }

    #[test]
    fn test_uncatalogued_versions_are_skipped() {
        let matrix = ScoringMatrix::new(vec![ScoreRow::new(
            ModelFamily::Claude,
            "claude_next",
            1,
            "Basecalling",
            ["C", "C", "P", "S", "R"],
        )]);
        let grid = build_score_grid(&matrix);
        assert!(grid.is_blank());
        assert_eq!(grid.steps, vec![1]);
    }

    #[test]
    fn test_empty_matrix_uses_known_steps() {
        let grid = build_score_grid(&ScoringMatrix::default());
        assert_eq!(grid.steps, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid.step_labels[2], "Host Depletion");
        assert!(grid.is_blank());
    }

    #[test]
    fn test_family_spans() {
        let grid = build_score_grid(&ScoringMatrix::default());
        assert_eq!(
            grid.family_spans(),
            vec![
                (ModelFamily::OpenAi, 0, 8),
                (ModelFamily::Claude, 9, 14),
                (ModelFamily::Gemini, 15, 21),
            ]
        );
    }
}
