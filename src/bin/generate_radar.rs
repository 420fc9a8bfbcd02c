// Radar, bar and line chart entry point
//
// Purpose: render family_radar.png, step_difficulty.png and version_timeline.png
// Usage: cargo run --bin generate_radar -- [--root DIR]

use clap::Parser;
use pipeline_eval_scorer::aggregates::step_averages;
use pipeline_eval_scorer::charts::{render_family_radar, render_step_difficulty, render_version_timeline};
use pipeline_eval_scorer::{logging, version_trajectories, ChartConfig, EvalError, RootArgs, ScoringMatrix};

#[derive(Parser)]
#[command(about = "Generate dimension radar, step difficulty and version timeline charts.")]
struct Cli {
    #[command(flatten)]
    root: RootArgs,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let paths = cli.root.paths();
    let config = ChartConfig::default();

    let matrix = match ScoringMatrix::load(&paths.scoring_matrix()) {
        Ok(matrix) => matrix,
        Err(EvalError::MissingInputFile(path)) => {
            println!("Error: {} not found.", path.display());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let radar = paths.family_radar();
    render_family_radar(&matrix, &radar, &config)?;
    println!("Family radars saved to {}", radar.display());

    let bars = paths.step_difficulty();
    render_step_difficulty(&step_averages(&matrix), &bars, &config)?;
    println!("Step difficulty chart saved to {}", bars.display());

    let timeline = paths.version_timeline();
    render_version_timeline(&version_trajectories(&matrix), &timeline, &config)?;
    println!("Timeline chart saved to {}", timeline.display());

    Ok(())
}
