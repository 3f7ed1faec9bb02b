//! Eval command handler: ranks a single 5 to 7 card hand.

use std::io::Write;

use staybot_engine::cards::parse_cards;
use staybot_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand_rank};

/// Handle the eval command.
///
/// # Errors
///
/// Returns `CliError::Engine` for malformed tokens or a hand outside 5 to 7 cards.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let rank = evaluate_hand(&cards)?;
    writeln!(out, "Hand: {}", format_board(&cards))?;
    writeln!(out, "Rank: {}", format_hand_rank(&rank))?;
    Ok(())
}
