//! Time-bounded two-armed bandit choosing between staying in and folding.
//!
//! Each arm keeps a visit count and a reward sum. Selection is UCB1: an
//! unvisited arm scores positive infinity, otherwise
//! `mean + sqrt(2 ln(total) / visits)`. The loop runs until the clock reports
//! the configured budget as spent; an in-flight trial always completes.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::context::DecisionContext;
use crate::deck::seeded_rng;
use crate::errors::EngineError;
use crate::sampler::sample;

/// Default wall-clock budget for one decision.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(9_500);

/// Stay win rate at or above which we keep playing.
pub const STAY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Choice {
    Stay,
    Fold,
}

impl Choice {
    pub fn is_stay(self) -> bool {
        matches!(self, Choice::Stay)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Stay => "STAY",
            Choice::Fold => "FOLD",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running statistics for one bandit arm.
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    pub choice: Choice,
    pub visits: u64,
    pub cumulative_reward: f64,
}

impl Arm {
    pub fn new(choice: Choice) -> Self {
        Self {
            choice,
            visits: 0,
            cumulative_reward: 0.0,
        }
    }

    pub fn ucb1(&self, total_visits: u64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        self.cumulative_reward / n + (2.0 * (total_visits as f64).ln() / n).sqrt()
    }

    pub fn record(&mut self, reward: f64) {
        self.visits += 1;
        self.cumulative_reward += reward;
    }

    /// Mean reward, `None` while the arm is unvisited.
    pub fn win_rate(&self) -> Option<f64> {
        (self.visits > 0).then(|| self.cumulative_reward / self.visits as f64)
    }

    fn stats(&self) -> Result<ArmStats, EngineError> {
        let win_rate = self
            .win_rate()
            .ok_or_else(|| EngineError::ArmNeverVisited(self.choice.to_string()))?;
        Ok(ArmStats {
            visits: self.visits,
            cumulative_reward: self.cumulative_reward,
            win_rate,
        })
    }
}

/// Index of the arm with the strictly greatest UCB1 score; the earliest arm
/// wins ties.
pub fn select_arm(arms: &[Arm]) -> usize {
    let total: u64 = arms.iter().map(|a| a.visits).sum();
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, arm) in arms.iter().enumerate() {
        let score = arm.ucb1(total);
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmStats {
    pub visits: u64,
    pub cumulative_reward: f64,
    pub win_rate: f64,
}

/// Final recommendation plus the statistics it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub choice: Choice,
    pub stay: ArmStats,
    pub fold: ArmStats,
    pub trials: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecideConfig {
    pub time_budget: Duration,
}

impl Default for DecideConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl DecideConfig {
    pub fn with_budget(time_budget: Duration) -> Self {
        Self { time_budget }
    }
}

/// Runs the stay/fold bandit for one decision context.
#[derive(Debug, Clone, Default)]
pub struct Decider {
    config: DecideConfig,
}

impl Decider {
    pub fn new(config: DecideConfig) -> Self {
        Self { config }
    }

    /// Samples until `clock` reports the budget spent, then turns the
    /// accumulated win rates into a decision.
    pub fn decide<R, C>(
        &self,
        ctx: &DecisionContext,
        rng: &mut R,
        clock: &C,
    ) -> Result<Decision, EngineError>
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let mut arms = [Arm::new(Choice::Stay), Arm::new(Choice::Fold)];
        debug!(
            street = ?ctx.street(),
            budget_ms = self.config.time_budget.as_millis() as u64,
            "starting decision"
        );

        while clock.elapsed() < self.config.time_budget {
            let i = select_arm(&arms);
            let reward = sample(ctx, arms[i].choice.is_stay(), rng)?;
            arms[i].record(reward);
        }

        let [stay_arm, fold_arm] = &arms;
        let stay = stay_arm.stats()?;
        let fold = fold_arm.stats()?;
        let choice = if stay.win_rate >= STAY_THRESHOLD {
            Choice::Stay
        } else {
            Choice::Fold
        };
        let trials = stay.visits + fold.visits;
        info!(
            trials,
            stay_visits = stay.visits,
            stay_win_rate = stay.win_rate,
            fold_visits = fold.visits,
            fold_win_rate = fold.win_rate,
            %choice,
            "decision complete"
        );
        Ok(Decision {
            choice,
            stay,
            fold,
            trials,
        })
    }

    /// Wall-clock run with a ChaCha20 generator. Returns the seed actually
    /// used so unseeded runs can be replayed.
    pub fn decide_with_seed(
        &self,
        ctx: &DecisionContext,
        seed: Option<u64>,
    ) -> Result<(Decision, u64), EngineError> {
        let (mut rng, seed) = seeded_rng(seed);
        let clock = SystemClock::start();
        let decision = self.decide(ctx, &mut rng, &clock)?;
        Ok((decision, seed))
    }
}
