use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// Returns the 52-card universe minus `excluded`, in [`full_deck`] order.
pub fn available_cards(excluded: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !excluded.contains(c))
        .collect()
}

/// Draws `n` distinct cards uniformly at random from `pool`.
///
/// The pool itself is left untouched; asking for more cards than it holds is
/// an error rather than a silent truncation.
pub fn draw_random<R: Rng + ?Sized>(
    pool: &[Card],
    n: usize,
    rng: &mut R,
) -> Result<Vec<Card>, EngineError> {
    if n > pool.len() {
        return Err(EngineError::DeckExhausted {
            requested: n,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, n).copied().collect())
}

/// Builds the generator used for one decision run.
///
/// Returns the seed alongside so an unseeded run can still be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha20Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha20Rng::seed_from_u64(seed), seed)
}
