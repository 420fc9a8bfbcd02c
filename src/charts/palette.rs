//! Colours shared by the charts

use crate::catalog::ModelFamily;
use plotters::style::RGBColor;

pub const SCORE_RED: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
pub const SCORE_ORANGE: RGBColor = RGBColor(0xf3, 0x9c, 0x12);
pub const SCORE_GREEN: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
pub const NOT_EVALUATED: RGBColor = RGBColor(0xf5, 0xf5, 0xf5);
pub const MUTED_TEXT: RGBColor = RGBColor(0x99, 0x99, 0x99);

pub const BAR_GOOD: RGBColor = RGBColor(0x10, 0xb9, 0x81);
pub const BAR_FAIR: RGBColor = RGBColor(0xf5, 0x9e, 0x0b);
pub const BAR_POOR: RGBColor = RGBColor(0xef, 0x44, 0x44);

pub const TITLE: RGBColor = RGBColor(0x1e, 0x29, 0x3b);
pub const AXIS_TEXT: RGBColor = RGBColor(0x33, 0x41, 0x55);
pub const GRID_LINE: RGBColor = RGBColor(0xe2, 0xe8, 0xf0);
pub const RING_TEXT: RGBColor = RGBColor(0x94, 0xa3, 0xb8);

/// Viridis anchor colours, evenly spaced over [0, 1]
const VIRIDIS: [RGBColor; 5] = [
    RGBColor(0x44, 0x01, 0x54),
    RGBColor(0x3b, 0x52, 0x8b),
    RGBColor(0x21, 0x91, 0x8c),
    RGBColor(0x5e, 0xc9, 0x62),
    RGBColor(0xfd, 0xe7, 0x25),
];

pub fn family_color(family: ModelFamily) -> RGBColor {
    match family {
        ModelFamily::OpenAi => RGBColor(0x10, 0xb9, 0x81),
        ModelFamily::Claude => RGBColor(0x8b, 0x5c, 0xf6),
        ModelFamily::Gemini => RGBColor(0xf4, 0x3f, 0x5e),
    }
}

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Piecewise-linear lookup into evenly spaced stops
fn ramp(stops: &[RGBColor], t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (stops.len() - 1) as f64;
    let scaled = t * segments;
    let idx = (scaled.floor() as usize).min(stops.len() - 2);
    lerp(stops[idx], stops[idx + 1], scaled - idx as f64)
}

/// Red → orange → green over [0, 1]
pub fn score_color(value: f64) -> RGBColor {
    ramp(&[SCORE_RED, SCORE_ORANGE, SCORE_GREEN], value)
}

/// Cell label colour: white on the dark end of the ramp
pub fn score_text_color(value: f64) -> RGBColor {
    if value < 0.4 {
        RGBColor(0xff, 0xff, 0xff)
    } else {
        RGBColor(0, 0, 0)
    }
}

/// Bar colour for a step's average composite
pub fn difficulty_color(average: f64) -> RGBColor {
    if average >= 0.85 {
        BAR_GOOD
    } else if average >= 0.7 {
        BAR_FAIR
    } else {
        BAR_POOR
    }
}

/// `n` colours sampled evenly from viridis (oldest version darkest)
pub fn version_colors(n: usize) -> Vec<RGBColor> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n).map(|i| ramp(&VIRIDIS, i as f64 / denom)).collect()
}
