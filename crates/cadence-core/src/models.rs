//! Domain models for Cadence

use serde::{Deserialize, Serialize};

/// A single edit event from the productivity log.
///
/// The log is a JSON array written by an external editor extension. The
/// character delta is camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    #[serde(rename = "charsAdded")]
    pub chars_added: i64,
}

/// A derived (day, hour) feature pair with its training target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    /// ISO day of week, 1 = Monday .. 7 = Sunday
    pub day: u32,
    /// Hour of day, 0..=23
    pub hour: u32,
    /// Characters added in this interval (training target)
    pub chars_added: i64,
}

impl FeatureRow {
    /// Feature vector in schema field order.
    pub fn features(&self) -> [f64; 2] {
        [self.day as f64, self.hour as f64]
    }
}

/// One feature field in a model's input schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureField {
    pub name: String,
    /// Inclusive lower bound of valid values
    pub min: i64,
    /// Inclusive upper bound of valid values
    pub max: i64,
}

/// Ordered description of a model's inputs and target.
///
/// Embedded in the model artifact so the loader can verify compatibility
/// before predicting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub fields: Vec<FeatureField>,
    pub target: String,
}

impl FeatureSchema {
    /// Human-readable one-line form, used in error messages and `inspect`.
    pub fn describe(&self) -> String {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}[{}..={}]", f.name, f.min, f.max))
            .collect();
        format!("({}) -> {}", fields.join(", "), self.target)
    }
}

/// A (day, hour) bucket with the character count summed over the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatedBucket {
    pub day: u32,
    pub hour: u32,
    pub chars_added: i64,
}

impl AggregatedBucket {
    /// Feature vector in schema field order.
    pub fn features(&self) -> [f64; 2] {
        [self.day as f64, self.hour as f64]
    }

    /// Composite x-axis label, e.g. "3-9" for Wednesday 09:00.
    pub fn label(&self) -> String {
        format!("{}-{}", self.day, self.hour)
    }
}

/// An aggregated bucket paired with the model's prediction for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedPoint {
    pub bucket: AggregatedBucket,
    pub predicted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_wire_format() {
        let json = r#"{"timestamp":"2024-01-03T09:15:00","charsAdded":120}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.timestamp, "2024-01-03T09:15:00");
        assert_eq!(entry.chars_added, 120);

        let back = serde_json::to_string(&entry).unwrap();
        assert!(back.contains("\"charsAdded\":120"));
    }

    #[test]
    fn test_bucket_label() {
        let bucket = AggregatedBucket {
            day: 3,
            hour: 9,
            chars_added: 200,
        };
        assert_eq!(bucket.label(), "3-9");
    }

    #[test]
    fn test_schema_describe() {
        let schema = FeatureSchema {
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
        };
        assert_eq!(schema.describe(), "(day[1..=7], hour[0..=23]) -> chars_added");
    }
}
