use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid card token: {0:?}")]
    InvalidCard(String),
    #[error("Duplicate card in play: {0}")]
    DuplicateCard(Card),
    #[error("Too many board cards: {0}, maximum: 5")]
    TooManyBoardCards(usize),
    #[error("Hand must hold 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Cannot draw {requested} cards, only {available} remain")]
    DeckExhausted { requested: usize, available: usize },
    #[error("Option {0} was never sampled before the budget expired")]
    ArmNeverVisited(String),
}
