//! Random sample trees.
//!
//! `fixture(k, n, rng)` holds the values k, 2k, ..., nk inserted in random
//! order, so two fixtures with the same `k` differ in shape but always walk
//! to the same sequence.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

use crate::domain::Tree;

/// Number of values in a fixture unless configured otherwise.
pub const DEFAULT_FIXTURE_SIZE: usize = 10;

/// Random binary search tree holding `k, 2k, ..., size * k`.
#[instrument(level = "debug", skip(rng))]
pub fn fixture<R: Rng + ?Sized>(k: i64, size: usize, rng: &mut R) -> Tree<i64> {
    let mut values: Vec<i64> = (1..=size as i64).map(|i| i.saturating_mul(k)).collect();
    values.shuffle(rng);
    trace!(?values, "insertion order");
    Tree::from_values(values)
}

/// Deterministic generator when `seed` is given, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
