//! Read-only analyses over the scoring matrix
//!
//! Each aggregator is a pure function of `ScoringMatrix`:
//! - `first_correct`: first fully correct version per family
//! - `step_difficulty`: steps ranked by mean composite score
//! - `failure_modes`: most common wrong grade per step and dimension
//! - `profiles`, `grid`: chart inputs

pub mod failure_modes;
pub mod first_correct;
pub mod grid;
pub mod profiles;
pub mod step_difficulty;

pub use failure_modes::{common_failures_per_step, FailureMode, StepFailures};
pub use first_correct::{first_fully_correct, FamilyVerdict};
pub use grid::{build_score_grid, GridRow, ScoreGrid};
pub use profiles::{
    family_dimension_profiles, ordered_versions, version_trajectories, FamilyTrajectory,
    TrajectoryPoint, VersionProfile,
};
pub use step_difficulty::{rank_step_difficulty, step_averages, StepDifficulty};

use crate::data::ScoringMatrix;
use serde::Serialize;

/// The three report sections produced by the summary entry point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub first_correct: Vec<FamilyVerdict>,
    pub steps_ranked: Vec<StepDifficulty>,
    pub failures: Vec<StepFailures>,
}

impl Summary {
    pub fn compute(matrix: &ScoringMatrix) -> Self {
        Self {
            first_correct: first_fully_correct(matrix),
            steps_ranked: rank_step_difficulty(matrix),
            failures: common_failures_per_step(matrix),
        }
    }
}
