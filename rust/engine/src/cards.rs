use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering significance for hand strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (c)
    Clubs,
    /// Diamonds suit (d)
    Diamonds,
    /// Hearts suit (h)
    Hearts,
    /// Spades suit (s)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Ace is always high; numeric values double as tiebreak keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        all_ranks()
            .into_iter()
            .find(|r| r.symbol() == c.to_ascii_uppercase())
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub fn from_value(v: u8) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.value() == v)
    }
}

/// Represents a single playing card with a suit and rank.
///
/// Cards print and parse as two-character tokens such as `Ah` or `Td`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCard(s.to_string());
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::from_symbol(r).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(su).ok_or_else(invalid)?;
        Ok(Card { suit, rank })
    }
}

/// Parses a list of card tokens, failing on the first malformed one.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, EngineError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_lowercase_tokens() {
        let ah: Card = "Ah".parse().unwrap();
        assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
        let td: Card = "td".parse().unwrap();
        assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "A", "10h", "Ax", "1h", "Ahh"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(EngineError::InvalidCard(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_matches_token_form() {
        for c in full_deck() {
            let token = c.to_string();
            assert_eq!(token.parse::<Card>().unwrap(), c);
        }
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).to_string(), "Qs");
    }

    #[test]
    fn full_deck_has_52_distinct_cards() {
        let deck = full_deck();
        let unique: std::collections::HashSet<_> = deck.iter().collect();
        assert_eq!(deck.len(), 52);
        assert_eq!(unique.len(), 52);
    }
}
