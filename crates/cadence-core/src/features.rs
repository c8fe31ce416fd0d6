//! Feature derivation shared by the trainer and the insight generator
//!
//! Both pipelines derive features through this module; the model is always
//! queried with the semantics it was trained on. The schema is embedded in
//! the model artifact and checked at load time.

use chrono::{Datelike, Timelike};

use crate::error::Result;
use crate::log::parse_timestamp;
use crate::models::{FeatureField, FeatureRow, FeatureSchema, LogEntry};

impl FeatureSchema {
    /// The canonical (day, hour) schema: ISO day of week (1 = Monday ..
    /// 7 = Sunday) and hour of day, predicting summed characters added.
    pub fn day_hour() -> Self {
        FeatureSchema {
            fields: vec![
                FeatureField {
                    name: "day".to_string(),
                    min: 1,
                    max: 7,
                },
                FeatureField {
                    name: "hour".to_string(),
                    min: 0,
                    max: 23,
                },
            ],
            target: "chars_added".to_string(),
        }
    }
}

/// Derive (day, hour) feature rows from raw log entries.
///
/// The first unparseable timestamp aborts extraction with a typed error.
pub fn extract(entries: &[LogEntry]) -> Result<Vec<FeatureRow>> {
    entries
        .iter()
        .map(|entry| {
            let ts = parse_timestamp(&entry.timestamp)?;
            Ok(FeatureRow {
                day: ts.weekday().number_from_monday(),
                hour: ts.hour(),
                chars_added: entry.chars_added,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn entry(timestamp: &str, chars_added: i64) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            chars_added,
        }
    }

    #[test]
    fn test_extract_day_of_week_and_hour() {
        // 2024-01-03 was a Wednesday
        let rows = extract(&[entry("2024-01-03T09:15:00", 120)]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, 3);
        assert_eq!(rows[0].hour, 9);
        assert_eq!(rows[0].chars_added, 120);
    }

    #[test]
    fn test_extract_sunday_is_seven() {
        // 2024-01-07 was a Sunday
        let rows = extract(&[entry("2024-01-07T23:59:59", 1)]).unwrap();
        assert_eq!(rows[0].day, 7);
        assert_eq!(rows[0].hour, 23);
    }

    #[test]
    fn test_extract_aborts_on_bad_timestamp() {
        let entries = vec![entry("2024-01-03T09:15:00", 120), entry("bogus", 80)];
        assert!(matches!(
            extract(&entries),
            Err(Error::Timestamp { .. })
        ));
    }

    #[test]
    fn test_extract_deterministic() {
        let entries = vec![
            entry("2024-01-03T09:15:00.500Z", 120),
            entry("2024-01-04T14:00:00", 80),
        ];
        assert_eq!(extract(&entries).unwrap(), extract(&entries).unwrap());
    }

    #[test]
    fn test_day_hour_schema_shape() {
        let schema = FeatureSchema::day_hour();
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[0].name, "day");
        assert_eq!(schema.fields[1].name, "hour");
        assert_eq!(schema.target, "chars_added");
    }
}
