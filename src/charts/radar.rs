//! Per-family radar of dimension means
//!
//! One panel per family (OpenAI, Claude, Gemini). Axes start at 12 o'clock
//! and run clockwise in dimension order.

use super::palette::{self, GRID_LINE, RING_TEXT, TITLE};
use super::{bold, font, render_to, smaller, DrawResult};
use crate::aggregates::{family_dimension_profiles, VersionProfile};
use crate::catalog::ModelFamily;
use crate::config::ChartConfig;
use crate::data::ScoringMatrix;
use crate::error::Result;
use crate::scorer::{Dimension, DIMENSION_COUNT};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::PI;
use std::path::Path;

const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const EXTENT: f64 = 1.45;

/// Unit vector for dimension `k`
fn axis(k: usize) -> (f64, f64) {
    let theta = PI / 2.0 - 2.0 * PI * k as f64 / DIMENSION_COUNT as f64;
    (theta.cos(), theta.sin())
}

/// Polygon vertices for a profile; dimensions without data sit at the centre
fn vertices(profile: &VersionProfile) -> Vec<(f64, f64)> {
    profile
        .means
        .iter()
        .enumerate()
        .map(|(k, mean)| {
            let r = mean.unwrap_or(0.0);
            let (dx, dy) = axis(k);
            (r * dx, r * dy)
        })
        .collect()
}

/// Render the three family panels to `path`
pub fn render_family_radar(matrix: &ScoringMatrix, path: &Path, config: &ChartConfig) -> Result<()> {
    let panels: Vec<(ModelFamily, Vec<VersionProfile>)> = ModelFamily::ALL
        .iter()
        .map(|&family| (family, family_dimension_profiles(matrix, family)))
        .collect();
    render_to(path, "family_radar", |p| draw_radars(&panels, p, config))
}

fn draw_radars(panels: &[(ModelFamily, Vec<VersionProfile>)], path: &Path, config: &ChartConfig) -> DrawResult {
    let root = BitMapBackend::new(path, config.radar_size).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, panels.len().max(1)));
    for ((family, profiles), area) in panels.iter().zip(areas.iter()) {
        draw_panel(area, *family, profiles, config)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    family: ModelFamily,
    profiles: &[VersionProfile],
    config: &ChartConfig,
) -> DrawResult {
    let mut chart = ChartBuilder::on(area)
        .caption(
            family.display_name(),
            bold(config, smaller(config.caption_size, 6)).color(&TITLE),
        )
        .margin(16)
        .build_cartesian_2d(-EXTENT..EXTENT, -EXTENT..EXTENT)?;

    // Rings and their value labels
    for r in RINGS {
        let ring: Vec<(f64, f64)> = (0..=72)
            .map(|i| {
                let t = 2.0 * PI * i as f64 / 72.0;
                (r * t.cos(), r * t.sin())
            })
            .collect();
        chart.draw_series(std::iter::once(PathElement::new(ring, GRID_LINE.stroke_width(1))))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{r:.2}"),
            (0.03, r),
            font(config, 11).color(&RING_TEXT).pos(Pos::new(HPos::Left, VPos::Bottom)),
        )))?;
    }

    // Spokes and dimension labels
    for dim in Dimension::ALL {
        let (dx, dy) = axis(dim.index());
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (dx, dy)],
            GRID_LINE.stroke_width(1),
        )))?;
        let hpos = if dx > 0.2 {
            HPos::Left
        } else if dx < -0.2 {
            HPos::Right
        } else {
            HPos::Center
        };
        chart.draw_series(std::iter::once(Text::new(
            dim.label().to_string(),
            (dx * 1.1, dy * 1.1),
            font(config, 12).color(&BLACK).pos(Pos::new(hpos, VPos::Center)),
        )))?;
    }

    if profiles.is_empty() {
        chart.draw_series(std::iter::once(Text::new(
            "no data".to_string(),
            (0.0, -1.3),
            font(config, 13).color(&RING_TEXT).pos(Pos::new(HPos::Center, VPos::Center)),
        )))?;
        return Ok(());
    }

    let colors = palette::version_colors(profiles.len());
    for (profile, color) in profiles.iter().zip(colors) {
        let points = vertices(profile);
        let mut outline = points.clone();
        outline.push(points[0]);

        chart.draw_series(std::iter::once(Polygon::new(points.clone(), color.mix(0.12).filled())))?;
        chart
            .draw_series(std::iter::once(PathElement::new(outline, color.stroke_width(2))))?
            .label(profile.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2)));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.85))
        .border_style(GRID_LINE)
        .label_font(font(config, 11))
        .draw()?;

    Ok(())
}
