//! Machine-readable summary for `aggregate_scores --json`

use crate::aggregates::Summary;
use crate::error::Result;

pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed `Summary`; families and dimensions use their snake_case names
    pub fn format(summary: &Summary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{FailureMode, FamilyVerdict, StepDifficulty, StepFailures};
    use crate::catalog::ModelFamily;
    use crate::scorer::Dimension;

    fn summary() -> Summary {
        Summary {
            first_correct: vec![
                FamilyVerdict { family: ModelFamily::OpenAi, first_correct_version: None },
                FamilyVerdict { family: ModelFamily::Claude, first_correct_version: Some("opus_4.5".into()) },
            ],
            steps_ranked: vec![StepDifficulty {
                step_number: 3,
                step_name: "Host Depletion".into(),
                average: None,
                scored_rows: 0,
            }],
            failures: vec![StepFailures {
                step_number: 3,
                modes: vec![FailureMode {
                    dimension: Dimension::OutputCompatibility,
                    letter: "F".into(),
                    count: 4,
                }],
            }],
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&summary()).unwrap();

        assert!(json.contains("\"family\": \"openai\""));
        assert!(json.contains("\"first_correct_version\": null"));
        assert!(json.contains("\"first_correct_version\": \"opus_4.5\""));
        assert!(json.contains("\"average\": null"));
        assert!(json.contains("\"dimension\": \"output_compatibility\""));
    }

    #[test]
    fn test_json_parses_back_with_counts() {
        let json = JsonFormatter::format(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["first_correct"].as_array().unwrap().len(), 2);
        assert_eq!(value["failures"][0]["modes"][0]["count"], 4);
        assert_eq!(value["steps_ranked"][0]["step_name"], "Host Depletion");
    }
}
