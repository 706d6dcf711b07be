//! Randomness seam for the shuffle step.
//!
//! Callers own the source, so concurrent invocations never share state and
//! tests can pin a seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Produces a permutation of a slice in place.
pub trait RandomSource {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffling backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed yields the same permutations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves the input order untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl RandomSource for KeepOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
