//! Single-trial outcome sampling against one unknown opponent hand.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::context::DecisionContext;
use crate::deck::{available_cards, draw_random};
use crate::errors::EngineError;
use crate::hand::{compare_hands, evaluate_hand};

/// Reward credited to folding: a neutral, zero-information result.
pub const FOLD_REWARD: f64 = 0.5;

/// Showdown result of one completed trial, from our point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    pub fn reward(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.5,
            Outcome::Loss => 0.0,
        }
    }
}

/// Deals a random opponent hand and the rest of the board, then settles the
/// showdown.
pub fn simulate_showdown<R: Rng + ?Sized>(
    ctx: &DecisionContext,
    rng: &mut R,
) -> Result<Outcome, EngineError> {
    let mut used = ctx.used_cards();
    let opp_hole = draw_random(&available_cards(&used), 2, rng)?;
    used.extend_from_slice(&opp_hole);
    let runout = draw_random(&available_cards(&used), ctx.missing_board(), rng)?;

    let mut board = ctx.board().to_vec();
    board.extend_from_slice(&runout);

    let mut mine = ctx.hole().to_vec();
    mine.extend_from_slice(&board);
    let mut theirs = opp_hole;
    theirs.extend_from_slice(&board);

    let outcome = match compare_hands(&evaluate_hand(&mine)?, &evaluate_hand(&theirs)?) {
        Ordering::Greater => Outcome::Win,
        Ordering::Equal => Outcome::Tie,
        Ordering::Less => Outcome::Loss,
    };
    Ok(outcome)
}

/// Reward of one trial for the given option.
pub fn sample<R: Rng + ?Sized>(
    ctx: &DecisionContext,
    stay: bool,
    rng: &mut R,
) -> Result<f64, EngineError> {
    if !stay {
        return Ok(FOLD_REWARD);
    }
    simulate_showdown(ctx, rng).map(Outcome::reward)
}
