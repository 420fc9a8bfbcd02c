//! Paths and chart settings shared by the binaries
//!
//! Every path is derived from a single project root. The layout matches the
//! evaluation repository:
//!
//! ```text
//! <root>/results/tables/scoring_matrix.csv
//! <root>/evaluations/summary_generated.md
//! <root>/results/figures/*.png
//! ```

use clap::Args;
use std::path::{Path, PathBuf};

/// `--root` flag flattened into every binary's parser
#[derive(Debug, Clone, Args)]
pub struct RootArgs {
    /// Project root containing `results/` and `evaluations/`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl RootArgs {
    pub fn paths(&self) -> ProjectPaths {
        ProjectPaths::new(&self.root)
    }
}

/// Fixed input and output locations under a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn scoring_matrix(&self) -> PathBuf {
        self.root.join("results").join("tables").join("scoring_matrix.csv")
    }

    pub fn markdown_summary(&self) -> PathBuf {
        self.root.join("evaluations").join("summary_generated.md")
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.root.join("results").join("figures")
    }

    pub fn heatmap(&self) -> PathBuf {
        self.figures_dir().join("scoring_heatmap.png")
    }

    pub fn family_radar(&self) -> PathBuf {
        self.figures_dir().join("family_radar.png")
    }

    pub fn step_difficulty(&self) -> PathBuf {
        self.figures_dir().join("step_difficulty.png")
    }

    pub fn version_timeline(&self) -> PathBuf {
        self.figures_dir().join("version_timeline.png")
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Image sizes and typography for the PNG charts
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub heatmap_size: (u32, u32),
    pub radar_size: (u32, u32),
    pub difficulty_size: (u32, u32),
    pub timeline_size: (u32, u32),
    pub font_family: String,
    pub caption_size: u32,
    pub label_size: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            heatmap_size: (1000, 1400),
            radar_size: (1500, 560),
            difficulty_size: (1000, 620),
            timeline_size: (1400, 600),
            font_family: "sans-serif".to_string(),
            caption_size: 26,
            label_size: 15,
        }
    }
}
