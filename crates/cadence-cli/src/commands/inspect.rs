//! Model artifact inspection command

use std::path::Path;

use anyhow::{Context, Result};

use cadence_core::{FeatureSchema, ModelArtifact};

pub fn cmd_inspect(model_path: &Path) -> Result<()> {
    let artifact = ModelArtifact::load(model_path, &FeatureSchema::day_hour())
        .with_context(|| format!("Failed to load model artifact: {}", model_path.display()))?;

    println!();
    println!("📊 Model artifact: {}", model_path.display());
    println!("   Format version: {}", artifact.version);
    println!("   Created:        {}", artifact.created_at);
    println!("   Schema:         {}", artifact.schema.describe());
    println!(
        "   Tree:           {} nodes, {} leaves, depth {}",
        artifact.tree.n_nodes(),
        artifact.tree.n_leaves(),
        artifact.tree.depth()
    );
    Ok(())
}
