//! Insight plot generation command

use std::path::Path;

use anyhow::{Context, Result};

use cadence_core::{aggregate, features, log, plot, FeatureSchema, ModelArtifact, PredictedPoint};

pub fn cmd_insights(model_path: &Path, log_path: &Path, output_path: &Path) -> Result<()> {
    let entries = log::load_log(log_path)
        .with_context(|| format!("Failed to load productivity log: {}", log_path.display()))?;
    let rows = features::extract(&entries).context("Failed to derive features from the log")?;
    let buckets = aggregate(&rows);

    let artifact = ModelArtifact::load(model_path, &FeatureSchema::day_hour())
        .with_context(|| format!("Failed to load model artifact: {}", model_path.display()))?;

    println!(
        "📈 Predicting productivity for {} (day, hour) buckets...",
        buckets.len()
    );

    let points: Vec<PredictedPoint> = buckets
        .into_iter()
        .map(|bucket| PredictedPoint {
            predicted: artifact.tree.predict(&bucket.features()),
            bucket,
        })
        .collect();

    plot::render_series(&points, output_path)
        .with_context(|| format!("Failed to render plot: {}", output_path.display()))?;

    println!("✅ Time series plot saved to {}", output_path.display());
    Ok(())
}
