//! Decide command handler.
//!
//! Parses the hole and board tokens, resolves budget and seed against the
//! configuration (flags win), runs the bandit and prints the result. When a
//! log path is configured, a [`DecisionRecord`] is appended as JSONL.

use std::io::Write;

use staybot_engine::bandit::{DecideConfig, Decider, Decision};
use staybot_engine::cards::{Card, parse_cards};
use staybot_engine::context::DecisionContext;
use staybot_engine::logger::{DecisionLogger, DecisionRecord};
use tracing::debug;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::format_decision;

#[derive(Debug, Clone, Default)]
pub struct DecideOptions {
    pub hole: Vec<String>,
    pub board: Vec<String>,
    pub seed: Option<u64>,
    pub budget: Option<f64>,
    pub json: bool,
    pub log: Option<String>,
}

/// Handle the decide command.
///
/// # Errors
///
/// Returns `CliError::Engine` for malformed or duplicate cards,
/// `CliError::Config` for an invalid budget or configuration, and
/// `CliError::Io` when output or the decision log cannot be written.
pub fn handle_decide_command(opts: DecideOptions, out: &mut dyn Write) -> Result<(), CliError> {
    let config = config::load_with_sources()?.config;
    let ctx = parse_context(&opts.hole, &opts.board)?;
    let decide_config = resolve_budget(opts.budget, &config)?;
    let seed = opts.seed.or(config.seed);

    let (decision, seed) = run_decision(&ctx, decide_config, seed)?;

    if opts.json {
        let json = decision_json(&ctx, &decision, seed);
        let json_str = serde_json::to_string_pretty(&json).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "{}", format_decision(&ctx, &decision, seed))?;
    }

    if let Some(path) = opts.log.or(config.log_path) {
        let mut logger = DecisionLogger::append(&path)?;
        let id = logger.next_id();
        logger.write(&DecisionRecord::new(id, seed, &ctx, &decide_config, &decision))?;
        debug!(path = %path, "decision logged");
    }
    Ok(())
}

pub(crate) fn parse_context(
    hole: &[String],
    board: &[String],
) -> Result<DecisionContext, CliError> {
    let hole = parse_cards(hole)?;
    let board = parse_cards(board)?;
    Ok(DecisionContext::from_cards(&hole, &board)?)
}

/// Flag value if given, else the configured budget. Validation happens here so
/// a valid flag overrides a bad file or env value.
pub(crate) fn resolve_budget(
    flag: Option<f64>,
    config: &Config,
) -> Result<DecideConfig, CliError> {
    let secs = flag.unwrap_or(config.time_budget_secs);
    Ok(DecideConfig::with_budget(config::budget_duration(secs)?))
}

pub(crate) fn run_decision(
    ctx: &DecisionContext,
    config: DecideConfig,
    seed: Option<u64>,
) -> Result<(Decision, u64), CliError> {
    debug!(
        budget_ms = config.time_budget.as_millis() as u64,
        seed = ?seed,
        "running decision"
    );
    Ok(Decider::new(config).decide_with_seed(ctx, seed)?)
}

fn decision_json(ctx: &DecisionContext, decision: &Decision, seed: u64) -> serde_json::Value {
    let tokens = |cards: &[Card]| cards.iter().map(Card::to_string).collect::<Vec<_>>();
    serde_json::json!({
        "decision": decision.choice,
        "hole": tokens(ctx.hole()),
        "board": tokens(ctx.board()),
        "street": ctx.street(),
        "seed": seed,
        "trials": decision.trials,
        "stay": decision.stay,
        "fold": decision.fold,
    })
}
