//! Core types for the events-testgen tool.
//!
//! This crate provides the foundational types shared by the generator and
//! the CSV writer:
//!
//! - [`Event`] - A single synthetic activity event
//! - [`EventKind`] / [`OwnerKind`] - Classifying enums with their wire names
//! - [`EventPayload`] - Tagged union of type-specific payloads
//! - [`Pools`] - Sampling vocabularies with compiled-in defaults
//! - [`Window`] - The time range event timestamps fall in
//!
//! # Architecture
//!
//! ```text
//! events-core (this crate)
//!    │
//!    ├─── events-generator     (samples Pools into Events)
//!    │
//!    └─── events-populate-csv  (serializes Events to CSV rows)
//! ```

pub mod event;
pub mod payload;
pub mod pools;
pub mod window;

// Re-exports for convenience
pub use event::{Event, EventKind, OwnerKind, ParseEventKindError, ParseOwnerKindError};
pub use payload::{DeployEnvironment, DeployStatus, EventPayload, PullRequestState};
pub use pools::Pools;
pub use window::Window;
