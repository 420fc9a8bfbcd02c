//! Step difficulty bar chart

use super::palette::{self, AXIS_TEXT, GRID_LINE, MUTED_TEXT, TITLE};
use super::{bold, font, render_to, smaller, DrawResult};
use crate::aggregates::StepDifficulty;
use crate::catalog;
use crate::config::ChartConfig;
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// "N. Name" using the canonical label, then the row's name, then "Step N"
fn bar_label(step: &StepDifficulty) -> String {
    let name = catalog::step_label(step.step_number)
        .map(str::to_string)
        .or_else(|| (!step.step_name.is_empty()).then(|| step.step_name.clone()))
        .unwrap_or_else(|| format!("Step {}", step.step_number));
    format!("{}. {}", step.step_number, name)
}

/// Render one horizontal bar per step, first step at the top
///
/// `steps` is expected in step order (see `step_averages`). A step without
/// data draws no bar and is labelled "no data".
pub fn render_step_difficulty(steps: &[StepDifficulty], path: &Path, config: &ChartConfig) -> Result<()> {
    render_to(path, "step_difficulty", |p| draw_bars(steps, p, config))
}

fn draw_bars(steps: &[StepDifficulty], path: &Path, config: &ChartConfig) -> DrawResult {
    let root = BitMapBackend::new(path, config.difficulty_size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = steps.len().max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Step Difficulty Ranking", bold(config, smaller(config.caption_size, 4)).color(&TITLE))
        .margin(20)
        .margin_left(170)
        .x_label_area_size(50)
        .build_cartesian_2d(0f64..1.05f64, 0f64..n as f64)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_labels(6)
        .x_label_formatter(&|v| format!("{v:.1}"))
        .x_desc("Average Composite Score (all models)")
        .axis_style(GRID_LINE)
        .light_line_style(WHITE)
        .bold_line_style(GRID_LINE.mix(0.6))
        .label_style(font(config, smaller(config.label_size, 2)).color(&AXIS_TEXT))
        .axis_desc_style(font(config, smaller(config.label_size, 1)).color(&AXIS_TEXT))
        .draw()?;

    let label_style = font(config, smaller(config.label_size, 1))
        .color(&AXIS_TEXT)
        .pos(Pos::new(HPos::Right, VPos::Center));

    for (k, step) in steps.iter().enumerate() {
        let y = (n - 1 - k) as f64;
        let mid = y + 0.5;

        let (px, py) = chart.backend_coord(&(0.0, mid));
        root.draw(&Text::new(bar_label(step), (px - 8, py), label_style.clone()))?;

        match step.average {
            Some(avg) => {
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(0.0, y + 0.2), (avg, y + 0.8)],
                    palette::difficulty_color(avg).filled(),
                )))?;
                chart.draw_series(std::iter::once(Text::new(
                    format!("{avg:.2}"),
                    (avg + 0.02, mid),
                    bold(config, smaller(config.label_size, 2))
                        .color(&AXIS_TEXT)
                        .pos(Pos::new(HPos::Left, VPos::Center)),
                )))?;
            }
            None => {
                chart.draw_series(std::iter::once(Text::new(
                    "no data".to_string(),
                    (0.02, mid),
                    font(config, smaller(config.label_size, 2))
                        .color(&MUTED_TEXT)
                        .pos(Pos::new(HPos::Left, VPos::Center)),
                )))?;
            }
        }
    }

    root.present()?;
    Ok(())
}
