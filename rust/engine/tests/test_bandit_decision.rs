use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use staybot_engine::bandit::{Choice, DecideConfig, Decider, Decision, DEFAULT_TIME_BUDGET};
use staybot_engine::cards::parse_cards;
use staybot_engine::clock::TickClock;
use staybot_engine::context::DecisionContext;
use staybot_engine::errors::EngineError;

fn ctx(hole: &[&str], board: &[&str]) -> DecisionContext {
    DecisionContext::from_cards(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap())
        .unwrap()
}

/// Runs exactly `trials` loop iterations with a seeded generator.
fn run_trials(c: &DecisionContext, trials: u32, seed: u64) -> Result<Decision, EngineError> {
    let decider = Decider::new(DecideConfig::with_budget(Duration::from_millis(trials as u64)));
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let clock = TickClock::new(Duration::from_millis(1));
    decider.decide(c, &mut rng, &clock)
}

#[test]
fn default_budget_is_nine_and_a_half_seconds() {
    assert_eq!(DEFAULT_TIME_BUDGET, Duration::from_millis(9_500));
    assert_eq!(DecideConfig::default().time_budget, DEFAULT_TIME_BUDGET);
}

#[test]
fn loop_stops_when_the_clock_reaches_the_budget() {
    let c = ctx(&["Ah", "Kd"], &["Qs", "Jc", "Th"]);
    let d = run_trials(&c, 250, 1).unwrap();
    assert_eq!(d.trials, 250);
    assert_eq!(d.stay.visits + d.fold.visits, 250);
    assert!(d.stay.visits >= 1 && d.fold.visits >= 1);
}

#[test]
fn open_ended_draw_is_reproducible_with_a_fixed_seed() {
    let c = ctx(&["Ah", "Kd"], &["Qs", "Jc", "Th"]);
    let first = run_trials(&c, 1_000, 99).unwrap();
    let second = run_trials(&c, 1_000, 99).unwrap();
    assert_eq!(first, second);
    assert!(matches!(first.choice, Choice::Stay | Choice::Fold));
}

#[test]
fn made_full_house_stays() {
    let c = ctx(&["9h", "9d"], &["9s", "Jc", "Js"]);
    let d = run_trials(&c, 2_000, 7).unwrap();
    assert_eq!(d.choice, Choice::Stay);
    assert!(d.stay.win_rate > 0.75, "stay win rate {}", d.stay.win_rate);
    assert!(d.stay.visits > d.fold.visits);
}

#[test]
fn unbeatable_hand_has_perfect_stay_rate() {
    let c = ctx(&["9h", "9d"], &["9s", "9c", "2d", "5h", "Kc"]);
    let d = run_trials(&c, 500, 3).unwrap();
    assert_eq!(d.stay.win_rate, 1.0);
    assert_eq!(d.choice, Choice::Stay);
}

#[test]
fn fold_arm_always_reports_half() {
    for (hole, board) in [
        (vec!["2h", "7d"], vec!["Ks", "Qd", "9c"]),
        (vec!["Ah", "3h"], vec!["Kh", "9h", "2s"]),
        (vec!["6c", "2h"], vec!["9d", "6d", "Jc"]),
    ] {
        let d = run_trials(&ctx(&hole, &board), 300, 5).unwrap();
        assert_eq!(d.fold.win_rate, 0.5);
        assert!((0.0..=1.0).contains(&d.stay.win_rate));
    }
}

#[test]
fn more_trials_tighten_the_stay_estimate() {
    let c = ctx(&["Ah", "Kd"], &["Qs", "Jc", "Th"]);
    let variance = |trials: u32| {
        let rates: Vec<f64> = (0..20u64)
            .map(|seed| run_trials(&c, trials, seed).unwrap().stay.win_rate)
            .collect();
        let mean = rates.iter().sum::<f64>() / rates.len() as f64;
        rates.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / rates.len() as f64
    };
    let short = variance(40);
    let long = variance(4_000);
    assert!(long < short, "variance {long} at 4000 trials vs {short} at 40");
}

#[test]
fn budget_too_small_to_visit_both_arms_fails() {
    let c = ctx(&["Ah", "Kd"], &[]);
    assert!(matches!(
        run_trials(&c, 0, 1),
        Err(EngineError::ArmNeverVisited(ref s)) if s == "STAY"
    ));
    assert!(matches!(
        run_trials(&c, 1, 1),
        Err(EngineError::ArmNeverVisited(ref s)) if s == "FOLD"
    ));
    let d = run_trials(&c, 2, 1).unwrap();
    assert_eq!((d.stay.visits, d.fold.visits), (1, 1));
}

#[test]
fn wall_clock_run_respects_the_budget() {
    let c = ctx(&["Ad", "Qh"], &["Qc", "7d", "2s"]);
    let budget = Duration::from_millis(60);
    let decider = Decider::new(DecideConfig::with_budget(budget));
    let start = Instant::now();
    let (d, seed) = decider.decide_with_seed(&c, Some(4)).unwrap();
    let took = start.elapsed();
    assert_eq!(seed, 4);
    assert!(took >= budget, "returned after {took:?}");
    assert!(took < budget + Duration::from_secs(2), "overran: {took:?}");
    assert!(d.trials >= 2);
}
