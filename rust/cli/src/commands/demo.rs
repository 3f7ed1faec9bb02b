//! Demo command handler.
//!
//! Runs a fixed set of example spots (open-ended draws, made hands, air)
//! through the same path as `decide` and prints one verdict per hand.

use std::io::Write;
use std::time::Duration;

use crate::commands::decide::{parse_context, resolve_budget, run_decision};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_arm, format_board};
use crate::ui;

/// Example spots as (hole, board) token lists.
pub const DEMO_HANDS: [([&str; 2], &[&str]); 7] = [
    (["Ah", "Kd"], &["Qs", "Jc", "Th"]),
    (["2h", "7d"], &["Ks", "Qd", "9c"]),
    (["Ah", "3h"], &["Kh", "9h", "2s"]),
    (["9h", "9d"], &["9s", "Jc", "Js"]),
    (["Ad", "Qh"], &["Qc", "7d", "2s"]),
    (["6c", "2h"], &["9d", "6d", "Jc"]),
    (["8h", "7d"], &["9c", "6s", "5h"]),
];

/// Handle the demo command.
///
/// With a seed, hand `i` is sampled with `seed + i` so the whole run is
/// reproducible.
pub fn handle_demo_command(
    budget: Option<f64>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::load_with_sources()?.config;
    let decide_config = resolve_budget(budget, &config)?;
    let base_seed = seed.or(config.seed);

    let total = decide_config
        .time_budget
        .checked_mul(DEMO_HANDS.len() as u32)
        .unwrap_or(Duration::MAX);
    if total > Duration::from_secs(30) {
        ui::display_warning(
            err,
            &format!("demo will take about {}s; pass --budget to shorten it", total.as_secs()),
        )?;
    }

    for (i, (hole, board)) in DEMO_HANDS.iter().enumerate() {
        let hole: Vec<String> = hole.iter().map(|s| s.to_string()).collect();
        let board: Vec<String> = board.iter().map(|s| s.to_string()).collect();
        let ctx = parse_context(&hole, &board)?;
        let hand_seed = base_seed.map(|s| s.wrapping_add(i as u64));
        let (decision, _) = run_decision(&ctx, decide_config, hand_seed)?;

        writeln!(
            out,
            "Test {}: {} + {}",
            i + 1,
            format_board(ctx.hole()),
            format_board(ctx.board())
        )?;
        writeln!(out, "{}", format_arm("STAY", &decision.stay))?;
        writeln!(out, "{}", format_arm("FOLD", &decision.fold))?;
        writeln!(out, "Bot decision: {}", decision.choice)?;
    }
    Ok(())
}
