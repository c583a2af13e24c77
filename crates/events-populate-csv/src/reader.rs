//! Round-trip reader for event CSV files.
//!
//! Decodes files produced by [`CsvPopulator`](crate::CsvPopulator) back into
//! `Event` values. The integration tests use this to check the output stays
//! losslessly decodable.

use crate::error::CsvReadError;
use crate::populator::TIMESTAMP_FORMAT;
use chrono::{DateTime, NaiveDateTime, Utc};
use events_core::{Event, EventKind, EventPayload, OwnerKind};
use std::path::Path;

/// Read all events from a CSV file with the events-table column layout.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, CsvReadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut events = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        events.push(parse_record(&record, i + 1)?);
    }
    Ok(events)
}

fn parse_record(record: &csv::StringRecord, row: usize) -> Result<Event, CsvReadError> {
    let field = |idx: usize, column: &'static str| {
        record.get(idx).ok_or_else(|| CsvReadError::Parse {
            row,
            column,
            message: "missing column".to_string(),
        })
    };

    Ok(Event {
        id: field(0, "id")?.to_string(),
        kind: field(1, "type")?
            .parse::<EventKind>()
            .map_err(|e| parse_err(row, "type", e))?,
        owner: field(2, "owner")?.to_string(),
        owner_kind: field(3, "owner_type")?
            .parse::<OwnerKind>()
            .map_err(|e| parse_err(row, "owner_type", e))?,
        repo: field(4, "repo")?.to_string(),
        member: field(5, "member")?.to_string(),
        timestamp: parse_timestamp(field(6, "timestamp")?, row, "timestamp")?,
        payload: serde_json::from_str::<EventPayload>(field(7, "data")?)
            .map_err(|e| parse_err(row, "data", e))?,
        created_at: parse_timestamp(field(8, "created_at")?, row, "created_at")?,
    })
}

fn parse_timestamp(
    value: &str,
    row: usize,
    column: &'static str,
) -> Result<DateTime<Utc>, CsvReadError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| parse_err(row, column, e))
}

fn parse_err(row: usize, column: &'static str, err: impl std::fmt::Display) -> CsvReadError {
    CsvReadError::Parse {
        row,
        column,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::populator::CsvPopulator;
    use chrono::TimeZone;
    use events_core::{Pools, Window};
    use events_generator::EventGenerator;
    use std::io::Write;
    use tempfile::TempDir;

    fn test_events(count: u64) -> Vec<Event> {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let window = Window::trailing_days(end, 90);
        let mut generator = EventGenerator::new(Pools::default(), window, 42).unwrap();
        generator.generate(count)
    }

    #[test]
    fn test_roundtrip_equality() {
        let events = test_events(50);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_events.csv");

        CsvPopulator::new().write_events(&path, &events).unwrap();
        let decoded = read_events(&path).unwrap();

        assert_eq!(decoded, events);
    }

    #[test]
    fn test_read_header_only_file() {
        let events = test_events(0);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_events.csv");

        CsvPopulator::new().write_events(&path, &events).unwrap();

        assert!(read_events(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_rejects_bad_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,type,owner,owner_type,repo,member,timestamp,data,created_at").unwrap();
        writeln!(
            file,
            "x-1,deploy,acme-corp,organization,web-app,alice,not-a-date,\"{}\",2024-05-01 00:00:00",
            r#"{""id"":""t"",""environment"":""staging"",""status"":""pending"",""ref"":""main"",""sha"":""abcdef0""}"#
        )
        .unwrap();

        let err = read_events(&path).unwrap_err();
        assert!(matches!(
            err,
            CsvReadError::Parse {
                row: 1,
                column: "timestamp",
                ..
            }
        ));
    }

    #[test]
    fn test_read_rejects_unknown_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "id,type,owner,owner_type,repo,member,timestamp,data,created_at").unwrap();
        writeln!(
            file,
            "x-1,push,alice,user,docs,bob,2024-05-01 00:00:00,{},2024-05-01 00:10:00",
            "{}"
        )
        .unwrap();

        let err = read_events(&path).unwrap_err();
        assert!(matches!(
            err,
            CsvReadError::Parse {
                row: 1,
                column: "type",
                ..
            }
        ));
    }
}
