//! PNG chart rendering
//!
//! Four figures, each drawn with plotters onto a `BitMapBackend`:
//! - `heatmap`: models × steps composite grid
//! - `radar`: per-family dimension profiles, one polygon per version
//! - `difficulty`: horizontal bars of per-step averages
//! - `timeline`: mean composite across versions, per family
//!
//! Drawing helpers return `Box<dyn Error>` so plotters' backend errors can
//! bubble up with `?`; the public entry points convert them to
//! `EvalError::Chart` naming the output file.

pub mod difficulty;
pub mod heatmap;
pub mod palette;
pub mod radar;
pub mod timeline;

pub use difficulty::render_step_difficulty;
pub use heatmap::render_heatmap;
pub use radar::render_family_radar;
pub use timeline::render_version_timeline;

use crate::config::ChartConfig;
use crate::error::{EvalError, Result};
use plotters::prelude::{FontDesc, FontStyle, IntoFont};
use std::fs;
use std::path::Path;

pub(crate) type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Create the output directory, run `draw`, and log the written file
pub(crate) fn render_to<F>(path: &Path, what: &str, draw: F) -> Result<()>
where
    F: FnOnce(&Path) -> DrawResult,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    draw(path).map_err(|e| EvalError::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!(chart = what, path = %path.display(), "chart written");
    Ok(())
}

pub(crate) fn font(config: &ChartConfig, size: u32) -> FontDesc<'_> {
    (config.font_family.as_str(), size).into_font()
}

pub(crate) fn bold(config: &ChartConfig, size: u32) -> FontDesc<'_> {
    font(config, size).style(FontStyle::Bold)
}

/// `size` reduced by `by` points, never below 1
pub(crate) fn smaller(size: u32, by: u32) -> u32 {
    size.saturating_sub(by).max(1)
}
