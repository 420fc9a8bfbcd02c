use crate::aggregates::Summary;

/// Plain-text formatter for the aggregated summary
///
/// The section layout already uses markdown table syntax so the same text
/// reads well in a terminal and when written to a `.md` file.
pub struct TextFormatter;

impl TextFormatter {
    /// Format the three report sections
    pub fn format(summary: &Summary) -> String {
        let mut lines = Vec::new();
        push_sections(&mut lines, summary);
        lines.join("\n")
    }
}

/// Append the report sections to `lines` (joined with '\n' by the caller)
pub(crate) fn push_sections(lines: &mut Vec<String>, summary: &Summary) {
    // First fully correct
    lines.push("\n## First Fully Correct Pipeline per Model Family\n".to_string());
    for verdict in &summary.first_correct {
        let status = verdict
            .first_correct_version
            .as_deref()
            .unwrap_or("None (no fully correct version)");
        lines.push(format!("- **{}:** {}", verdict.family.display_name(), status));
    }

    // Difficulty ranking
    lines.push("\n## Steps Ranked by Difficulty (lowest average score first)\n".to_string());
    lines.push("| Rank | Step | Avg Score |".to_string());
    lines.push("|:-----|:-----|:----------|".to_string());
    for (rank, step) in summary.steps_ranked.iter().enumerate() {
        let score = match step.average {
            Some(avg) => format!("{avg:.2}"),
            None => "no data".to_string(),
        };
        lines.push(format!(
            "| {} | {}. {} | {} |",
            rank + 1,
            step.step_number,
            step.step_name,
            score
        ));
    }

    // Failure modes
    lines.push("\n## Most Common Failure Mode per Step\n".to_string());
    for step in &summary.failures {
        if step.modes.is_empty() {
            lines.push(format!(
                "\n**Step {}:** no failures recorded (or no scores yet)",
                step.step_number
            ));
        } else {
            lines.push(format!("\n**Step {}:**", step.step_number));
            for mode in &step.modes {
                lines.push(format!("  - {}: {} ({}×)", mode.dimension, mode.letter, mode.count));
            }
        }
    }
}
