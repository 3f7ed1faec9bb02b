//! # staybot-engine: Stay-or-Fold Decision Core
//!
//! Decides, for one Texas Hold'em hand at a fixed point (two hole cards plus
//! zero to five known community cards), whether to keep playing or fold.
//! Equity against a single unknown opponent is estimated by random sampling
//! under a wall-clock budget, with a two-armed UCB1 bandit splitting the
//! trials between the two choices.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`deck`] - Remaining-card enumeration and seeded random draws
//! - [`hand`] - Hand ranking and strength comparison
//! - [`context`] - Validated decision input (hole cards and board)
//! - [`sampler`] - Single random trial producing a reward
//! - [`clock`] - Elapsed-time sources for the budgeted loop
//! - [`bandit`] - UCB1 stay/fold controller and final decision
//! - [`logger`] - JSONL decision records
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use staybot_engine::bandit::{DecideConfig, Decider};
//! use staybot_engine::cards::parse_cards;
//! use staybot_engine::clock::TickClock;
//! use staybot_engine::context::DecisionContext;
//! use staybot_engine::deck::seeded_rng;
//!
//! let hole = parse_cards(&["Ah", "Kd"]).unwrap();
//! let board = parse_cards(&["Qs", "Jc", "Th"]).unwrap();
//! let ctx = DecisionContext::from_cards(&hole, &board).unwrap();
//!
//! // A simulated clock makes the run length exact: 200 trials.
//! let decider = Decider::new(DecideConfig::with_budget(Duration::from_millis(200)));
//! let (mut rng, _seed) = seeded_rng(Some(7));
//! let clock = TickClock::new(Duration::from_millis(1));
//! let decision = decider.decide(&ctx, &mut rng, &clock).unwrap();
//! assert_eq!(decision.trials, 200);
//! println!("{} ({:.2})", decision.choice, decision.stay.win_rate);
//! ```
//!
//! ## Hand Ranking
//!
//! ```rust
//! use staybot_engine::cards::parse_cards;
//! use staybot_engine::hand::{evaluate_hand, Category};
//!
//! let quads = evaluate_hand(&parse_cards(&["Ah", "Ad", "As", "Ac", "Kh"]).unwrap()).unwrap();
//! let boat = evaluate_hand(&parse_cards(&["Ah", "Ad", "As", "Kh", "Kd"]).unwrap()).unwrap();
//! assert_eq!(quads.category, Category::FourOfAKind);
//! assert!(quads > boat);
//! ```

pub mod bandit;
pub mod cards;
pub mod clock;
pub mod context;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod sampler;
