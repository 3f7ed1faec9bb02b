//! Bench command handler for sampler throughput.
//!
//! Runs a fixed number of stay trials on a flop spot with a seeded
//! generator and reports the elapsed time.

use std::io::Write;
use std::time::Instant;

use staybot_engine::deck::seeded_rng;
use staybot_engine::sampler::{Outcome, simulate_showdown};

use crate::commands::decide::parse_context;
use crate::error::CliError;

/// Handle the bench command.
pub fn handle_bench_command(
    trials: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be at least 1".into()));
    }
    let hole = ["Ah".to_string(), "Kd".to_string()];
    let board = ["Qs".to_string(), "Jc".to_string(), "Th".to_string()];
    let ctx = parse_context(&hole, &board)?;
    let (mut rng, _) = seeded_rng(Some(seed.unwrap_or(1)));

    let start = Instant::now();
    let mut wins = 0u32;
    for _ in 0..trials {
        if simulate_showdown(&ctx, &mut rng)? == Outcome::Win {
            wins += 1;
        }
    }
    let dur = start.elapsed();
    let per_sec = trials as f64 / dur.as_secs_f64().max(f64::EPSILON);
    writeln!(
        out,
        "Benchmark: {} trials in {:?} ({:.0} trials/sec, {} wins)",
        trials, dur, per_sec, wins
    )?;
    Ok(())
}
