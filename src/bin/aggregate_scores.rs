// Summary entry point
//
// Purpose: print the aggregated scoring report for results/tables/scoring_matrix.csv
// Usage: cargo run --bin aggregate_scores -- [--markdown | --json] [--root DIR]

use clap::Parser;
use pipeline_eval_scorer::{
    logging, EvalError, JsonFormatter, MarkdownFormatter, RootArgs, ScoringMatrix, Summary,
    TextFormatter,
};

#[derive(Parser)]
#[command(about = "Aggregate LLM evaluation scores.")]
struct Cli {
    /// Output as markdown and write evaluations/summary_generated.md
    #[arg(long)]
    markdown: bool,

    /// Output the summary as JSON
    #[arg(long, conflicts_with = "markdown")]
    json: bool,

    #[command(flatten)]
    root: RootArgs,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let paths = cli.root.paths();

    let matrix = match ScoringMatrix::load(&paths.scoring_matrix()) {
        Ok(matrix) => matrix,
        Err(EvalError::MissingInputFile(path)) => {
            println!("Error: {} not found.", path.display());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if !matrix.has_any_scores() {
        println!("No scores have been entered yet. Fill in scoring_matrix.csv and re-run.");
        return Ok(());
    }

    let summary = Summary::compute(&matrix);
    tracing::debug!(
        steps = summary.steps_ranked.len(),
        families = summary.first_correct.len(),
        "summary computed"
    );

    if cli.json {
        println!("{}", JsonFormatter::format(&summary)?);
    } else if cli.markdown {
        let document = MarkdownFormatter::format(&summary);
        println!("{document}");
        let md_path = paths.markdown_summary();
        MarkdownFormatter::write(&document, &md_path)?;
        println!("\nMarkdown summary written to {}", md_path.display());
    } else {
        println!("{}", TextFormatter::format(&summary));
    }

    Ok(())
}
