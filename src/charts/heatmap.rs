//! Models × steps heatmap

use super::palette::{self, MUTED_TEXT, NOT_EVALUATED, SCORE_GREEN, SCORE_ORANGE, SCORE_RED};
use super::{bold, font, render_to, smaller, DrawResult};
use crate::aggregates::ScoreGrid;
use crate::config::ChartConfig;
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const LEGEND: [(RGBColor, &str); 4] = [
    (SCORE_GREEN, "Correct (1.0)"),
    (SCORE_ORANGE, "Partial (0.5)"),
    (SCORE_RED, "Incorrect (0.0)"),
    (NOT_EVALUATED, "Not evaluated"),
];

/// Render the composite grid to `path`
///
/// Row 0 of the grid is drawn at the top. Cells without a score are light
/// grey with a dash, which keeps "not evaluated" visually distinct from 0.0.
pub fn render_heatmap(grid: &ScoreGrid, path: &Path, config: &ChartConfig) -> Result<()> {
    render_to(path, "heatmap", |p| draw_heatmap(grid, p, config))
}

fn draw_heatmap(grid: &ScoreGrid, path: &Path, config: &ChartConfig) -> DrawResult {
    let root = BitMapBackend::new(path, config.heatmap_size).into_drawing_area();
    root.fill(&WHITE)?;

    let n_rows = grid.rows.len().max(1);
    let n_cols = grid.steps.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "LLM Nanopore Metagenomics Pipeline Evaluation",
            bold(config, config.caption_size),
        )
        .margin_top(20)
        .margin_left(190)
        .margin_right(110)
        .margin_bottom(110)
        .build_cartesian_2d(0f64..n_cols as f64, 0f64..n_rows as f64)?;

    // Cells, top row first
    for (i, row) in grid.rows.iter().enumerate() {
        let y = (n_rows - 1 - i) as f64;
        for (j, cell) in row.cells.iter().enumerate() {
            let x = j as f64;
            let fill = cell.map(palette::score_color).unwrap_or(NOT_EVALUATED);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                fill.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x + 1.0, y + 1.0)],
                WHITE.stroke_width(2),
            )))?;

            let center = (x + 0.5, y + 0.5);
            let (text, color) = match cell {
                Some(value) => (format!("{value:.1}"), palette::score_text_color(*value)),
                None => ("—".to_string(), MUTED_TEXT),
            };
            let style = match cell {
                Some(_) => bold(config, config.label_size),
                None => font(config, config.label_size),
            };
            chart.draw_series(std::iter::once(Text::new(
                text,
                center,
                style.color(&color).pos(Pos::new(HPos::Center, VPos::Center)),
            )))?;
        }
    }

    // Model labels on the left, family names on the right
    let label_style = font(config, config.label_size)
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, row) in grid.rows.iter().enumerate() {
        let y = (n_rows - 1 - i) as f64 + 0.5;
        let (px, py) = chart.backend_coord(&(0.0, y));
        root.draw(&Text::new(row.label.to_string(), (px - 8, py), label_style.clone()))?;
    }

    let family_style = bold(config, config.label_size + 2)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (family, start, end) in grid.family_spans() {
        let mid = (start + end) as f64 / 2.0;
        let y = (n_rows - 1) as f64 - mid + 0.5;
        let (px, py) = chart.backend_coord(&(n_cols as f64, y));
        root.draw(&Text::new(
            family.display_name().to_string(),
            (px + 12, py),
            family_style.clone(),
        ))?;
    }

    // Step labels and axis title under the grid
    let step_style = font(config, config.label_size)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (j, label) in grid.step_labels.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(j as f64 + 0.5, 0.0));
        root.draw(&Text::new(label.clone(), (px, py + 8), step_style.clone()))?;
    }
    let (left, bottom) = chart.backend_coord(&(0.0, 0.0));
    let (right, _) = chart.backend_coord(&(n_cols as f64, 0.0));
    root.draw(&Text::new(
        "Pipeline Step".to_string(),
        ((left + right) / 2, bottom + 34),
        font(config, config.label_size + 1)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    // Legend row
    let legend_style = font(config, smaller(config.label_size, 2))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let legend_y = bottom + 72;
    let slot = ((right - left) / LEGEND.len() as i32).max(1);
    for (k, (color, label)) in LEGEND.iter().enumerate() {
        let x = left + k as i32 * slot;
        root.draw(&Rectangle::new(
            [(x, legend_y - 8), (x + 16, legend_y + 8)],
            color.filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(x, legend_y - 8), (x + 16, legend_y + 8)],
            MUTED_TEXT.stroke_width(1),
        ))?;
        root.draw(&Text::new(label.to_string(), (x + 22, legend_y), legend_style.clone()))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::build_score_grid;
    use crate::catalog::ModelFamily;
    use crate::data::{ScoreRow, ScoringMatrix};

    #[test]
    fn test_render_heatmap_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figures").join("scoring_heatmap.png");
        let matrix = ScoringMatrix::new(vec![
            ScoreRow::new(ModelFamily::Claude, "opus_4.5", 1, "Basecalling", ["C", "C", "P", "S", "R"]),
            ScoreRow::new(ModelFamily::Claude, "opus_4.5", 2, "QC", ["I", "I", "F", "I", "N"]),
        ]);

        render_heatmap(&build_score_grid(&matrix), &path, &ChartConfig::default()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_render_empty_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring_heatmap.png");
        let grid = build_score_grid(&ScoringMatrix::new(vec![]));
        assert!(grid.is_blank());

        render_heatmap(&grid, &path, &ChartConfig::default()).unwrap();
        assert!(path.exists());
    }
}
