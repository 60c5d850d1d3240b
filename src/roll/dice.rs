//! Dice rolling
//!
//! The core itself never rolls; the orchestrator supplies results. This
//! roller exists for the CLI and tests and is seedable for replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Roll two six-sided dice
pub fn roll_2d6(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

/// Deterministic dice source
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn roll_2d6(&mut self) -> u32 {
        roll_2d6(&mut self.rng)
    }
}
