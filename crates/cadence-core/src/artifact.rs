//! Model artifact persistence
//!
//! The fitted regressor is stored as a JSON document carrying a format
//! version and the feature schema it was trained with. Loading validates
//! both before the model can be asked for predictions.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::FeatureSchema;
use crate::tree::DecisionTreeRegressor;

/// Current artifact format version. Bump on breaking layout changes.
pub const ARTIFACT_VERSION: u32 = 1;

/// A fitted model together with everything needed to use it safely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: u32,
    /// RFC 3339 creation stamp
    pub created_at: String,
    pub schema: FeatureSchema,
    pub tree: DecisionTreeRegressor,
}

impl ModelArtifact {
    pub fn new(tree: DecisionTreeRegressor, schema: FeatureSchema) -> Self {
        ModelArtifact {
            version: ARTIFACT_VERSION,
            created_at: Utc::now().to_rfc3339(),
            schema,
            tree,
        }
    }

    /// Write the artifact as pretty-printed JSON.
    ///
    /// Single write, all-or-nothing; a crash mid-write leaves a corrupt
    /// file that the loader will reject.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)?;
        debug!("saved model artifact to {}", path.display());
        Ok(())
    }

    /// Load an artifact and validate it against the schema the caller is
    /// about to query with.
    pub fn load(path: &Path, expected: &FeatureSchema) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&data)?;
        if artifact.version != ARTIFACT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: artifact.version,
            });
        }
        if &artifact.schema != expected {
            return Err(Error::SchemaMismatch {
                expected: expected.describe(),
                found: artifact.schema.describe(),
            });
        }
        if artifact.tree.n_nodes() == 0 {
            return Err(Error::InvalidData(
                "model artifact contains an empty tree".to_string(),
            ));
        }
        debug!("loaded model artifact from {}", path.display());
        Ok(artifact)
    }
}
