// Heatmap entry point
//
// Purpose: render results/figures/scoring_heatmap.png from the scoring matrix
// Usage: cargo run --bin generate_heatmap -- [--root DIR]

use clap::Parser;
use pipeline_eval_scorer::charts::render_heatmap;
use pipeline_eval_scorer::{build_score_grid, logging, ChartConfig, EvalError, RootArgs, ScoringMatrix};

#[derive(Parser)]
#[command(about = "Generate the models × steps scoring heatmap.")]
struct Cli {
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

    let grid = build_score_grid(&matrix);
    if grid.is_blank() {
        println!("No scores found in the matrix. Generating empty heatmap template.");
    }

    let output = paths.heatmap();
    render_heatmap(&grid, &output, &ChartConfig::default())?;
    println!("Heatmap saved to {}", output.display());

    Ok(())
}
