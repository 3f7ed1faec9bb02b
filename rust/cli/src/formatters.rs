//! Card, board, and decision formatters for terminal display.
//!
//! Cards are printed as the same two-character tokens the CLI accepts
//! (`Ah`, `Td`), so any output line can be pasted back as input.
//!
//! ## Example
//!
//! ```rust
//! use staybot_engine::cards::{Card, Rank, Suit};
//! use staybot_cli::formatters::format_board;
//!
//! let flop = vec![
//!     Card { rank: Rank::Queen, suit: Suit::Spades },
//!     Card { rank: Rank::Jack, suit: Suit::Clubs },
//!     Card { rank: Rank::Ten, suit: Suit::Hearts },
//! ];
//! assert_eq!(format_board(&flop), "[Qs Jc Th]");
//! ```

use staybot_engine::bandit::{ArmStats, Decision};
use staybot_engine::cards::{Card, Rank};
use staybot_engine::context::{DecisionContext, Street};
use staybot_engine::hand::{Category, HandRank};

/// Format a board (list of cards) as a string in bracket notation.
///
/// Returns `"[]"` for an empty board.
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", formatted_cards.join(" "))
}

pub fn format_street(street: Street) -> &'static str {
    match street {
        Street::Preflop => "preflop",
        Street::Flop => "flop",
        Street::Turn => "turn",
        Street::River => "river",
    }
}

pub fn format_category(category: Category) -> &'static str {
    match category {
        Category::HighCard => "High card",
        Category::OnePair => "One pair",
        Category::TwoPair => "Two pair",
        Category::ThreeOfAKind => "Three of a kind",
        Category::Straight => "Straight",
        Category::Flush => "Flush",
        Category::FullHouse => "Full house",
        Category::FourOfAKind => "Four of a kind",
        Category::StraightFlush => "Straight flush",
    }
}

/// Category name followed by the tiebreak ranks, e.g. `Flush (T 8 6 4 2)`.
pub fn format_hand_rank(rank: &HandRank) -> String {
    let ranks: Vec<String> = rank
        .tiebreak
        .iter()
        .map(|&v| Rank::from_value(v).map_or_else(|| v.to_string(), |r| r.symbol().to_string()))
        .collect();
    format!("{} ({})", format_category(rank.category), ranks.join(" "))
}

/// One line per arm in the form `STAY win rate: 61.5/100 = 0.61`.
pub fn format_arm(label: &str, stats: &ArmStats) -> String {
    format!(
        "{} win rate: {}/{} = {:.2}",
        label, stats.cumulative_reward, stats.visits, stats.win_rate
    )
}

pub fn format_context(ctx: &DecisionContext) -> String {
    format!(
        "Hole: {} Board: {} ({})",
        format_board(ctx.hole()),
        format_board(ctx.board()),
        format_street(ctx.street())
    )
}

/// Multi-line human-readable report of a finished decision.
pub fn format_decision(ctx: &DecisionContext, decision: &Decision, seed: u64) -> String {
    [
        format_context(ctx),
        format_arm("STAY", &decision.stay),
        format_arm("FOLD", &decision.fold),
        format!("Trials: {} (seed {})", decision.trials, seed),
        format!("Decision: {}", decision.choice),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use staybot_engine::cards::parse_cards;
    use staybot_engine::hand::evaluate_hand;

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_hand_rank_uses_rank_symbols() {
        let flush = evaluate_hand(&parse_cards(&["2h", "4h", "6h", "8h", "Th"]).unwrap()).unwrap();
        assert_eq!(format_hand_rank(&flush), "Flush (T 8 6 4 2)");
        let quads = evaluate_hand(&parse_cards(&["Ah", "Ad", "As", "Ac", "Kh"]).unwrap()).unwrap();
        assert_eq!(format_hand_rank(&quads), "Four of a kind (A)");
    }

    #[test]
    fn test_format_arm() {
        let stats = ArmStats {
            visits: 4,
            cumulative_reward: 3.0,
            win_rate: 0.75,
        };
        assert_eq!(format_arm("STAY", &stats), "STAY win rate: 3/4 = 0.75");
    }

    #[test]
    fn test_format_context() {
        let ctx = DecisionContext::from_cards(
            &parse_cards(&["Ah", "Kd"]).unwrap(),
            &parse_cards(&["Qs", "Jc", "Th"]).unwrap(),
        )
        .unwrap();
        assert_eq!(format_context(&ctx), "Hole: [Ah Kd] Board: [Qs Jc Th] (flop)");
    }
}
