//! Generate command implementation

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::manifest::Manifest;

/// Load the schema manifest, generate the C++ source, and write it out.
pub fn run(manifest_path: Option<String>, output: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "structgen.toml".to_string());

    println!("Loading schema: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    let generator = manifest.to_generator()?;
    let source = generator.generate()?;

    let output_path =
        PathBuf::from(output.unwrap_or_else(|| format!("{}.hpp", manifest.class.name)));
    fs::write(&output_path, &source)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "✓ Generated {} ({} variables, {} functions)",
        output_path.display(),
        manifest.variables.len(),
        manifest.functions.len()
    );

    Ok(())
}
