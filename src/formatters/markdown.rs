use crate::aggregates::Summary;
use crate::error::Result;
use crate::formatters::text::push_sections;
use std::fs;
use std::path::Path;

/// Markdown formatter for the aggregated summary
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format summary as a standalone markdown document
    pub fn format(summary: &Summary) -> String {
        let mut lines = vec![
            "# Aggregated Scoring Results\n".to_string(),
            "*Auto-generated from `scoring_matrix.csv`*\n".to_string(),
        ];
        push_sections(&mut lines, summary);
        lines.join("\n")
    }

    /// Write an already formatted document, creating the parent directory
    pub fn write(document: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document)?;
        tracing::info!(path = %path.display(), bytes = document.len(), "wrote markdown summary");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{FamilyVerdict, Summary};
    use crate::catalog::ModelFamily;

    fn summary() -> Summary {
        Summary {
            first_correct: vec![FamilyVerdict {
                family: ModelFamily::Gemini,
                first_correct_version: Some("3_pro".into()),
            }],
            steps_ranked: vec![],
            failures: vec![],
        }
    }

    #[test]
    fn test_format_markdown_header() {
        let md = MarkdownFormatter::format(&summary());
        assert!(md.starts_with("# Aggregated Scoring Results\n\n*Auto-generated from `scoring_matrix.csv`*\n\n"));
        assert!(md.contains("- **Gemini:** 3_pro"));
        assert!(md.contains("| Rank | Step | Avg Score |"));
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluations").join("summary_generated.md");
        let md = MarkdownFormatter::format(&summary());

        MarkdownFormatter::write(&md, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), md);
    }
}
