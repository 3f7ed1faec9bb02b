//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "staybot",
    version,
    about = "Stay-or-fold advice for a single hold'em hand"
)]
pub struct StaybotCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample one hand and print STAY or FOLD
    Decide {
        /// Our two hole cards, e.g. `--hole Ah Kd`
        #[arg(long, num_args = 2, required = true, value_name = "CARD")]
        hole: Vec<String>,
        /// Known community cards (up to five)
        #[arg(long, num_args = 1.., value_name = "CARD")]
        board: Vec<String>,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
        /// Time budget in seconds (default 9.5)
        #[arg(long, value_name = "SECS")]
        budget: Option<f64>,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
        /// Append a JSONL decision record to this file
        #[arg(long, value_name = "PATH")]
        log: Option<String>,
    },
    /// Run the built-in set of example hands
    Demo {
        #[arg(long, value_name = "SECS")]
        budget: Option<f64>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank a 5 to 7 card hand
    Eval {
        #[arg(required = true, num_args = 1.., value_name = "CARD")]
        cards: Vec<String>,
    },
    /// Measure sampler throughput
    Bench {
        #[arg(long, default_value_t = 10_000)]
        trials: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
