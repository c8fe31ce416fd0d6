//! Model training command

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cadence_core::{
    features, log, DecisionTreeRegressor, FeatureSchema, ModelArtifact, TreeParams,
};

pub fn cmd_train(log_path: &Path, model_path: &Path) -> Result<()> {
    let entries = log::load_log(log_path)
        .with_context(|| format!("Failed to load productivity log: {}", log_path.display()))?;
    let rows = features::extract(&entries).context("Failed to derive features from the log")?;

    println!("🌳 Training decision tree on {} samples...", rows.len());

    let samples: Vec<Vec<f64>> = rows.iter().map(|r| r.features().to_vec()).collect();
    let targets: Vec<f64> = rows.iter().map(|r| r.chars_added as f64).collect();
    let params = TreeParams::default();
    debug!("fit parameters: {:?}", params);

    let tree = DecisionTreeRegressor::fit(&samples, &targets, params)?;
    println!(
        "   Fitted: {} nodes, {} leaves, depth {}",
        tree.n_nodes(),
        tree.n_leaves(),
        tree.depth()
    );

    let artifact = ModelArtifact::new(tree, FeatureSchema::day_hour());
    artifact
        .save(model_path)
        .with_context(|| format!("Failed to write model artifact: {}", model_path.display()))?;

    println!("✅ Model saved to {}", model_path.display());
    Ok(())
}
