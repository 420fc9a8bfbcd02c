//! Per-version dimension profiles and version trajectories
//!
//! Inputs for the family radar and the version timeline charts.

use crate::catalog::{self, ModelFamily};
use crate::data::ScoringMatrix;
use crate::scorer::{composite, score, Dimension, DIMENSION_COUNT};

/// Mean score per dimension for one model version
#[derive(Debug, Clone, PartialEq)]
pub struct VersionProfile {
    pub version: String,
    pub label: String,
    /// None for a dimension with no mapped grade
    pub means: [Option<f64>; DIMENSION_COUNT],
}

/// One plotted point of a family's trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    /// Index of the version in the family's chronology
    pub position: usize,
    pub version: &'static str,
    pub short_label: &'static str,
    pub mean_composite: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FamilyTrajectory {
    pub family: ModelFamily,
    pub points: Vec<TrajectoryPoint>,
}

/// Versions of a family present in the matrix: catalogued ones in
/// chronological order, then uncatalogued ones in encounter order
pub fn ordered_versions(matrix: &ScoringMatrix, family: ModelFamily) -> Vec<String> {
    let present = matrix.versions_of(family);
    let mut ordered: Vec<String> = catalog::family_versions(family)
        .filter(|e| present.contains(&e.version))
        .map(|e| e.version.to_string())
        .collect();
    for version in present {
        if catalog::lookup(family, version).is_none() {
            ordered.push(version.to_string());
        }
    }
    ordered
}

/// Dimension means for every version of a family
///
/// Empty and unmapped grades are skipped, so a mean only reflects grades that
/// were actually entered.
pub fn family_dimension_profiles(matrix: &ScoringMatrix, family: ModelFamily) -> Vec<VersionProfile> {
    ordered_versions(matrix, family)
        .into_iter()
        .map(|version| {
            let mut sums = [0.0; DIMENSION_COUNT];
            let mut counts = [0usize; DIMENSION_COUNT];
            for row in matrix.rows_for_version(family, &version) {
                for dim in Dimension::ALL {
                    if let Some(value) = score(dim, row.grade(dim)) {
                        sums[dim.index()] += value;
                        counts[dim.index()] += 1;
                    }
                }
            }
            let means = std::array::from_fn(|d| (counts[d] > 0).then(|| sums[d] / counts[d] as f64));

            let label = catalog::lookup(family, &version)
                .map(|e| e.label.to_string())
                .unwrap_or_else(|| version.replace('_', " "));

            VersionProfile { version, label, means }
        })
        .collect()
}

/// Mean composite per catalogued version, per family in chart order
///
/// Versions without any composite-scored row are left out of the line.
pub fn version_trajectories(matrix: &ScoringMatrix) -> Vec<FamilyTrajectory> {
    ModelFamily::ALL
        .iter()
        .map(|&family| {
            let points = catalog::family_versions(family)
                .enumerate()
                .filter_map(|(position, entry)| {
                    let composites: Vec<f64> = matrix
                        .rows_for_version(family, entry.version)
                        .filter_map(composite)
                        .collect();
                    if composites.is_empty() {
                        return None;
                    }
                    Some(TrajectoryPoint {
                        position,
                        version: entry.version,
                        short_label: entry.short_label,
                        mean_composite: composites.iter().sum::<f64>() / composites.len() as f64,
                    })
                })
                .collect();
            FamilyTrajectory { family, points }
        })
        .collect()
}
