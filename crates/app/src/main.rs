//! `percolate`: Monte-Carlo estimator for the site-percolation threshold.
//!
//! Runs `trials` independent percolation experiments on an n×n grid and
//! prints the sample mean, standard deviation, and 95% confidence
//! interval. Results go to stdout; diagnostics go to stderr so `--json`
//! output stays machine-readable.

use clap::Parser;

use percolation::{Experiment, SimRng};

#[derive(Parser)]
#[command(author, version, about = "Estimate the site-percolation threshold", long_about = None)]
struct Cli {
    /// Grid side length; the grid is n×n.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed the run for reproducible output; defaults to OS entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the summary as a single JSON line instead of the
    /// human-readable block.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SimRng::from_seed_u64(seed),
        None => SimRng::from_entropy(),
    };

    let experiment = match Experiment::run(cli.n, cli.trials, &mut rng) {
        Ok(experiment) => experiment,
        Err(err) => {
            eprintln!("percolate: {err}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string(&experiment.summary()) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("percolate: failed to encode summary: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!("mean                    = {}", experiment.mean());
        println!("stddev                  = {}", experiment.stddev());
        println!(
            "95% confidence interval = [{}, {}]",
            experiment.confidence_lo(),
            experiment.confidence_hi()
        );
    }
}
