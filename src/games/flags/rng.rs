//! Randomness used to pick candidates and targets.
//!
//! The engine only needs two operations, so it takes any [`RandomSource`].
//! Play uses [`GameRng`]; tests can supply a scripted source to make whole
//! sessions reproducible.

use super::types::CountryCode;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of shuffles and uniform index picks.
pub trait RandomSource {
    /// Shuffles the pool in place.
    fn shuffle(&mut self, pool: &mut [CountryCode]);

    /// Returns an index uniformly distributed in `0..upper`.
    ///
    /// `upper` is always at least 1.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn shuffle(&mut self, pool: &mut [CountryCode]) {
        (**self).shuffle(pool)
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        (**self).pick_index(upper)
    }
}

/// Seeded ChaCha8 generator.
///
/// The same seed produces the same session, which makes a logged seed enough
/// to replay a game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Creates a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a seed taken from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn shuffle(&mut self, pool: &mut [CountryCode]) {
        pool.shuffle(&mut self.inner);
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}
