use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Totally ordered strength of a hand: category first, then the tiebreak
/// ranks compared lexicographically. Equal values are a split.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // single deciding rank, or the full descending sequence for flush/high card
    pub tiebreak: Vec<u8>,
}

impl HandRank {
    fn single(category: Category, rank: u8) -> Self {
        Self {
            category,
            tiebreak: vec![rank],
        }
    }
}

/// Ranks a 5 to 7 card hand.
///
/// Patterns are matched over every supplied card at once: a flush needs all
/// cards in one suit and a straight needs every rank consecutive, with the ace
/// only ever high. Two pair breaks ties on the higher pair alone.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| rank_val(c.rank)).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = ranks.windows(2).all(|w| w[0] == w[1] + 1);
    let groups = rank_groups(&ranks);
    let (top_rank, top_count) = groups[0];
    let second_count = groups.get(1).map_or(0, |&(_, n)| n);

    let rank = if flush && straight {
        HandRank::single(Category::StraightFlush, ranks[0])
    } else if top_count == 4 {
        HandRank::single(Category::FourOfAKind, top_rank)
    } else if top_count == 3 && second_count >= 2 {
        HandRank::single(Category::FullHouse, top_rank)
    } else if flush {
        HandRank {
            category: Category::Flush,
            tiebreak: ranks,
        }
    } else if straight {
        HandRank::single(Category::Straight, ranks[0])
    } else if top_count == 3 {
        HandRank::single(Category::ThreeOfAKind, top_rank)
    } else if top_count == 2 && second_count == 2 {
        // groups are ordered high rank first within equal counts
        HandRank::single(Category::TwoPair, top_rank)
    } else if top_count == 2 {
        HandRank::single(Category::OnePair, top_rank)
    } else {
        HandRank {
            category: Category::HighCard,
            tiebreak: ranks,
        }
    };
    Ok(rank)
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

/// Groups descending ranks into `(rank, count)` pairs, most frequent first,
/// higher rank first among equal counts.
fn rank_groups(sorted_desc: &[u8]) -> Vec<(u8, u8)> {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &r in sorted_desc {
        rank_counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_order_by_count_then_rank() {
        let g = rank_groups(&[13, 13, 9, 9, 9, 4, 4]);
        assert_eq!(g, vec![(9, 3), (13, 2), (4, 2)]);
    }

    #[test]
    fn groups_break_count_ties_high_first() {
        let g = rank_groups(&[14, 12, 12, 5, 5]);
        assert_eq!(g, vec![(12, 2), (5, 2), (14, 1)]);
    }
}
