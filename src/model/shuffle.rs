//! Fisher–Yates shuffle
//!
//! Every shuffle draws from its own ChaCha8 stream seeded from OS entropy, so
//! two shuffles never replay the same sequence. Tests inject a seeded RNG.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shuffle `items` in place with a freshly seeded RNG
pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = ChaCha8Rng::from_entropy();
    shuffle_with(items, &mut rng);
}

/// Shuffle `items` in place using `rng`
///
/// Walks from the last position down, swapping each with a uniformly chosen
/// index at or before it, so every permutation is equally likely.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
