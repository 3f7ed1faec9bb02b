use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// Represents a betting street in Texas Hold'em poker.
/// Derived from how many community cards are already known.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// No community cards yet
    Preflop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card
    River,
}

/// The read-only input to one decision: our hole cards plus the known board.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    hole: [Card; 2],
    board: Vec<Card>,
}

impl DecisionContext {
    pub fn new(hole: [Card; 2], board: Vec<Card>) -> Result<Self, EngineError> {
        if board.len() > 5 {
            return Err(EngineError::TooManyBoardCards(board.len()));
        }
        let mut seen = HashSet::with_capacity(7);
        for &c in hole.iter().chain(board.iter()) {
            if !seen.insert(c) {
                return Err(EngineError::DuplicateCard(c));
            }
        }
        Ok(Self { hole, board })
    }

    /// Builds a context from loose card lists, as handed over by a caller
    /// that parsed tokens itself.
    pub fn from_cards(hole: &[Card], board: &[Card]) -> Result<Self, EngineError> {
        let hole: [Card; 2] = hole
            .try_into()
            .map_err(|_| EngineError::InvalidHandSize(hole.len()))?;
        Self::new(hole, board.to_vec())
    }

    pub fn hole(&self) -> &[Card; 2] {
        &self.hole
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Cards already in play: hole cards followed by the board.
    pub fn used_cards(&self) -> Vec<Card> {
        let mut v = Vec::with_capacity(7);
        v.extend_from_slice(&self.hole);
        v.extend_from_slice(&self.board);
        v
    }

    /// Number of board cards still to be dealt.
    pub fn missing_board(&self) -> usize {
        5 - self.board.len()
    }

    pub fn street(&self) -> Street {
        match self.board.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}
