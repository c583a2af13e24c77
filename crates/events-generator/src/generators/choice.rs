//! Uniform selection from fixed pools.

use rand::Rng;

/// Pick a uniformly random element of `items`.
///
/// `items` must be non-empty; the generator validates its pools up front.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
