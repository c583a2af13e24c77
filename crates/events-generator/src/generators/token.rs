//! UUID tokens drawn from the run's seeded RNG.

use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
///
/// The bytes come from the caller's seeded RNG, not `Uuid::new_v4()` entropy.
pub fn uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
