//! Version timeline: mean composite per version, per family

use super::palette::{self, AXIS_TEXT, BAR_GOOD, GRID_LINE, TITLE};
use super::{bold, font, render_to, smaller, DrawResult};
use crate::aggregates::FamilyTrajectory;
use crate::catalog;
use crate::config::ChartConfig;
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const DEFAULT_FLOOR: f64 = 0.3;
const CEILING: f64 = 1.08;

/// Lower y bound: 0.3 unless a point falls below it
fn y_floor(trajectories: &[FamilyTrajectory]) -> f64 {
    trajectories
        .iter()
        .flat_map(|t| t.points.iter().map(|p| p.mean_composite))
        .fold(DEFAULT_FLOOR, |low, v| low.min(v - 0.05))
        .max(0.0)
}

/// Render one line per family, x = chronological position within the family
pub fn render_version_timeline(
    trajectories: &[FamilyTrajectory],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    render_to(path, "version_timeline", |p| draw_timeline(trajectories, p, config))
}

fn draw_timeline(trajectories: &[FamilyTrajectory], path: &Path, config: &ChartConfig) -> DrawResult {
    let root = BitMapBackend::new(path, config.timeline_size).into_drawing_area();
    root.fill(&WHITE)?;

    let longest = trajectories
        .iter()
        .map(|t| catalog::family_versions(t.family).count())
        .max()
        .unwrap_or(1)
        .max(1);
    let x_range = -0.5f64..(longest as f64 - 0.5);
    let floor = y_floor(trajectories);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "LLM Performance Trajectory: Nanopore Metagenomics Pipeline Generation",
            bold(config, smaller(config.caption_size, 6)).color(&TITLE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), floor..CEILING)?;

    chart
        .configure_mesh()
        .x_labels(longest)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.1}"))
        .x_desc("Model Version (chronological within family)")
        .y_desc("Average Composite Score")
        .axis_style(GRID_LINE)
        .light_line_style(WHITE)
        .bold_line_style(GRID_LINE.mix(0.5))
        .label_style(font(config, smaller(config.label_size, 2)).color(&AXIS_TEXT))
        .axis_desc_style(font(config, smaller(config.label_size, 1)).color(&AXIS_TEXT))
        .draw()?;

    // Perfect score reference
    chart.draw_series(DashedLineSeries::new(
        vec![(x_range.start, 1.0), (x_range.end, 1.0)],
        8,
        6,
        BAR_GOOD.mix(0.4).stroke_width(1),
    ))?;
    chart.draw_series(std::iter::once(Text::new(
        "Perfect".to_string(),
        (x_range.start + 0.05, 1.01),
        font(config, 11).color(&BAR_GOOD.mix(0.6)).pos(Pos::new(HPos::Left, VPos::Bottom)),
    )))?;

    for trajectory in trajectories {
        let color = palette::family_color(trajectory.family);
        let points: Vec<(f64, f64)> = trajectory
            .points
            .iter()
            .map(|p| (p.position as f64, p.mean_composite))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(trajectory.family.display_name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))?;

        if let Some(last) = trajectory.points.last() {
            let (px, py) = chart.backend_coord(&(last.position as f64, last.mean_composite));
            root.draw(&Text::new(
                last.short_label.to_string(),
                (px + 8, py - 4),
                bold(config, 12).color(&color).pos(Pos::new(HPos::Left, VPos::Bottom)),
            ))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(WHITE)
        .label_font(font(config, 12))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{version_trajectories, TrajectoryPoint};
    use crate::catalog::ModelFamily;
    use crate::data::{ScoreRow, ScoringMatrix};
    use approx::assert_relative_eq;

    #[test]
    fn test_y_floor() {
        let mut trajectories = vec![FamilyTrajectory { family: ModelFamily::Claude, points: vec![] }];
        assert_relative_eq!(y_floor(&trajectories), 0.3);

        trajectories[0].points.push(TrajectoryPoint {
            position: 0,
            version: "sonnet_3.5",
            short_label: "S3.5",
            mean_composite: 0.1,
        });
        assert_relative_eq!(y_floor(&trajectories), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_render_timeline_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("version_timeline.png");
        let matrix = ScoringMatrix::new(vec![
            ScoreRow::new(ModelFamily::Claude, "sonnet_4", 1, "Basecalling", ["A", "C", "P", "S", "R"]),
            ScoreRow::new(ModelFamily::Claude, "opus_4.6", 1, "Basecalling", ["C", "C", "P", "S", "R"]),
        ]);

        render_version_timeline(&version_trajectories(&matrix), &path, &ChartConfig::default()).unwrap();
        assert!(path.exists());
    }
}
