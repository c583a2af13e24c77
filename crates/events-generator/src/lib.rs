//! Seeded event generation for events-testgen.
//!
//! This crate provides the [`EventGenerator`], which produces synthetic
//! commit, pull-request, and deploy events from fixed sampling pools. The
//! generator owns a seeded RNG so runs with the same seed, pools, and window
//! produce identical events.
//!
//! # Architecture
//!
//! ```text
//! Pools + Window + seed
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  EventGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - used ids      │
//! │  - pr counters   │
//! │  - commit shas   │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Event { id, kind, owner, repo, member, timestamp, payload, created_at }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use events_core::{Pools, Window};
//! use events_generator::EventGenerator;
//!
//! let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
//! let window = Window::trailing_days(end, 90);
//!
//! let mut generator = EventGenerator::new(Pools::default(), window, 42).unwrap();
//! let events = generator.generate(10);
//!
//! assert_eq!(events.len(), 10);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{EventGenerator, GeneratorError};
