//! events-testgen: synthetic activity-event CSV generation.
//!
//! Library surface for the `events-testgen` binary: the console summary
//! report. Generation and CSV emission live in the `events-generator` and
//! `events-populate-csv` crates.

pub mod report;

pub use report::SummaryReport;
