//! Individual value samplers used by the event generator.
//!
//! Each module provides small free functions over `&mut R: Rng`, so the
//! generator can thread its single seeded RNG through every sample.

pub mod choice;
pub mod hex;
pub mod timestamp;
pub mod token;
