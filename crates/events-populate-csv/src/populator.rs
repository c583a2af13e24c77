//! CSV writer for generated events.

use crate::error::CsvPopulatorError;
use csv::Writer;
use events_core::Event;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Column order of the events CSV.
pub const EVENT_COLUMNS: [&str; 9] = [
    "id",
    "type",
    "owner",
    "owner_type",
    "repo",
    "member",
    "timestamp",
    "data",
    "created_at",
];

/// Second-precision format used for the timestamp columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that writes generated events to disk.
pub struct CsvPopulator {
    include_header: bool,
}

impl CsvPopulator {
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write events to `output_path` as CSV.
    ///
    /// # Returns
    ///
    /// Metrics about the write operation.
    pub fn write_events<P: AsRef<Path>>(
        &self,
        output_path: P,
        events: &[Event],
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing {} events to '{}'",
            events.len(),
            output_path.display()
        );

        // Create writer
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(EVENT_COLUMNS)?;
        }

        for event in events {
            writer.write_record(event_to_record(event)?)?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        // Flush and get file size
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

impl Default for CsvPopulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an event to a CSV record (vector of strings).
///
/// The payload lands in the `data` column as a JSON object; the CSV layer
/// handles any quoting the JSON needs.
pub fn event_to_record(event: &Event) -> Result<Vec<String>, serde_json::Error> {
    Ok(vec![
        event.id.clone(),
        event.kind.to_string(),
        event.owner.clone(),
        event.owner_kind.to_string(),
        event.repo.clone(),
        event.member.clone(),
        event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        serde_json::to_string(&event.payload)?,
        event.created_at.format(TIMESTAMP_FORMAT).to_string(),
    ])
}
