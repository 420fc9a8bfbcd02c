//! Model Catalog
//!
//! Single authoritative ordering of evaluated model versions. Heatmap rows and
//! trajectory x positions are both read from `MODEL_CATALOG`, so the visual
//! order and the chronological order cannot drift apart.
//!
//! Versions within a family are listed oldest first.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Model family being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    OpenAi,
    Claude,
    Gemini,
}

impl ModelFamily {
    /// Fixed panel/legend order used by the charts
    pub const ALL: [ModelFamily; 3] = [ModelFamily::OpenAi, ModelFamily::Claude, ModelFamily::Gemini];

    /// Identifier as written in the `model_family` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::OpenAi => "openai",
            ModelFamily::Claude => "claude",
            ModelFamily::Gemini => "gemini",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelFamily::OpenAi => "OpenAI",
            ModelFamily::Claude => "Claude",
            ModelFamily::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ModelFamily::OpenAi),
            "claude" => Ok(ModelFamily::Claude),
            "gemini" => Ok(ModelFamily::Gemini),
            other => Err(other.to_string()),
        }
    }
}

/// One catalogued model version with its display labels
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub family: ModelFamily,
    pub version: &'static str,
    /// Heatmap row label
    pub label: &'static str,
    /// Trajectory annotation label
    pub short_label: &'static str,
}

const fn entry(
    family: ModelFamily,
    version: &'static str,
    label: &'static str,
    short_label: &'static str,
) -> ModelEntry {
    ModelEntry { family, version, label, short_label }
}

use ModelFamily::{Claude, Gemini, OpenAi};

pub static MODEL_CATALOG: &[ModelEntry] = &[
    entry(OpenAi, "gpt4o", "GPT-4o", "GPT-4o"),
    entry(OpenAi, "o1_preview", "o1-preview", "o1-prev"),
    entry(OpenAi, "o1_mini", "o1-mini", "o1-mini"),
    entry(OpenAi, "o1", "o1", "o1"),
    entry(OpenAi, "o1_pro", "o1-pro", "o1-pro"),
    entry(OpenAi, "o3_mini", "o3-mini", "o3-mini"),
    entry(OpenAi, "o3_high", "o3 (high)", "o3"),
    entry(OpenAi, "o4_mini", "o4-mini", "o4-mini"),
    entry(OpenAi, "gpt5", "GPT-5", "GPT-5"),
    entry(Claude, "sonnet_3.5", "Sonnet 3.5", "S3.5"),
    entry(Claude, "sonnet_4", "Sonnet 4", "S4"),
    entry(Claude, "sonnet_4.5", "Sonnet 4.5", "S4.5"),
    entry(Claude, "haiku_4.5", "Haiku 4.5", "H4.5"),
    entry(Claude, "opus_4.5", "Opus 4.5", "Op4.5"),
    entry(Claude, "opus_4.6", "Opus 4.6", "Op4.6"),
    entry(Gemini, "2.0_flash", "2.0 Flash", "2.0F"),
    entry(Gemini, "2.5_pro_preview", "2.5 Pro Prev", "2.5PP"),
    entry(Gemini, "2.5_flash", "2.5 Flash", "2.5F"),
    entry(Gemini, "2.5_pro_stable", "2.5 Pro", "2.5P"),
    entry(Gemini, "3_pro", "3 Pro", "3P"),
    entry(Gemini, "3_deep_think", "3 Deep Think", "3DT"),
    entry(Gemini, "3_flash", "3 Flash", "3F"),
];

static STEP_LABELS: &[(u32, &str)] = &[
    (1, "Basecalling"),
    (2, "QC"),
    (3, "Host Depletion"),
    (4, "Taxonomy"),
    (5, "Assembly"),
    (6, "Binning"),
    (7, "Annotation"),
];

/// Catalog entries of one family, oldest first
pub fn family_versions(family: ModelFamily) -> impl Iterator<Item = &'static ModelEntry> {
    MODEL_CATALOG.iter().filter(move |e| e.family == family)
}

pub fn lookup(family: ModelFamily, version: &str) -> Option<&'static ModelEntry> {
    MODEL_CATALOG
        .iter()
        .find(|e| e.family == family && e.version == version)
}

/// Canonical pipeline step label, if the step is one of the seven known steps
pub fn step_label(step: u32) -> Option<&'static str> {
    STEP_LABELS
        .iter()
        .find(|(n, _)| *n == step)
        .map(|(_, label)| *label)
}

/// Every step number with a canonical label, ascending
pub fn known_steps() -> impl Iterator<Item = u32> {
    STEP_LABELS.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_family_parsing_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<ModelFamily>(), Ok(ModelFamily::OpenAi));
        assert_eq!(" claude ".parse::<ModelFamily>(), Ok(ModelFamily::Claude));
        assert_eq!("gemini".parse::<ModelFamily>(), Ok(ModelFamily::Gemini));
        assert!("mistral".parse::<ModelFamily>().is_err());
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let keys: HashSet<(ModelFamily, &str)> =
            MODEL_CATALOG.iter().map(|e| (e.family, e.version)).collect();
        assert_eq!(keys.len(), MODEL_CATALOG.len());
        assert_eq!(MODEL_CATALOG.len(), 22);
    }

    #[test]
    fn test_catalog_groups_families_contiguously() {
        // Heatmap family spans assume each family occupies one block of rows
        let mut seen = Vec::new();
        for e in MODEL_CATALOG {
            if seen.last() != Some(&e.family) {
                assert!(!seen.contains(&e.family), "{} split in catalog", e.family);
                seen.push(e.family);
            }
        }
        assert_eq!(seen, ModelFamily::ALL.to_vec());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(step_label(3), Some("Host Depletion"));
        assert_eq!(step_label(8), None);
        assert_eq!(known_steps().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
