//! Cadence Core Library
//!
//! Shared functionality for the Cadence productivity modeling tool:
//! - Productivity log loading and timestamp parsing
//! - (day, hour) feature derivation shared by both pipelines
//! - Deterministic decision-tree regression
//! - Versioned model artifact persistence with schema validation
//! - Bucket aggregation and time series plot rendering

pub mod aggregate;
pub mod artifact;
pub mod error;
pub mod features;
pub mod log;
pub mod models;
pub mod plot;
pub mod tree;

pub use aggregate::aggregate;
pub use artifact::{ModelArtifact, ARTIFACT_VERSION};
pub use error::{Error, Result};
pub use models::{
    AggregatedBucket, FeatureField, FeatureRow, FeatureSchema, LogEntry, PredictedPoint,
};
pub use tree::{DecisionTreeRegressor, TreeParams};
