//! Short random tokens drawn from a fixed alphabet.

use rand::Rng;

/// Generate a token of `len` characters drawn uniformly from `alphabet`.
///
/// `alphabet` must be non-empty.
pub fn token<R: Rng>(rng: &mut R, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
