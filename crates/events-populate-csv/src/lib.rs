//! CSV file writer for events-testgen.
//!
//! This crate serializes generated events into the events-table CSV layout
//! and reads them back for round-trip verification.
//!
//! # Example
//!
//! ```ignore
//! use events_populate_csv::CsvPopulator;
//!
//! let populator = CsvPopulator::new();
//! let metrics = populator.write_events("test_events.csv", &events)?;
//! ```

mod error;
mod populator;
mod reader;

pub use error::{CsvPopulatorError, CsvReadError};
pub use populator::{event_to_record, CsvPopulator, PopulateMetrics, EVENT_COLUMNS, TIMESTAMP_FORMAT};
pub use reader::read_events;
