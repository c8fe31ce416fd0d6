//! Productivity log loading and timestamp parsing
//!
//! The log is a JSON array of `{"timestamp": ..., "charsAdded": ...}`
//! objects written by an external editor extension. Timestamps are parsed
//! explicitly here; a malformed timestamp is a typed error, never a
//! silently wrong feature value.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::LogEntry;

/// Load a productivity log from a JSON file.
///
/// The file must exist, parse as a JSON array of log entries, and be
/// non-empty. Each condition maps to its own error variant.
pub fn load_log(path: &Path) -> Result<Vec<LogEntry>> {
    let data = fs::read_to_string(path)?;
    let entries: Vec<LogEntry> = serde_json::from_str(&data)?;
    if entries.is_empty() {
        return Err(Error::EmptyLog);
    }
    debug!(
        "loaded {} log entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

/// Parse a log timestamp into a naive datetime.
///
/// The log producer emits RFC 3339 (`2024-01-03T09:15:00.123Z`); the naive
/// fixed-width form without an offset (`2024-01-03T09:15:00`) is accepted
/// too, with or without fractional seconds.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    Err(Error::Timestamp {
        input: input.to_string(),
    })
}
