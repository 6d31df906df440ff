//! Type declaration (shim) generation command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use rewire_shim::{render_shim_file, ShimConfig};

use crate::config::{virtual_specifier, ConfigFile};

/// Run the shim command.
pub fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    let shims: Vec<(String, &ShimConfig)> = config
        .modules
        .iter()
        .filter_map(|(name, module)| {
            module
                .shim
                .as_ref()
                .map(|shim| (virtual_specifier(name), shim))
        })
        .collect();

    if shims.is_empty() {
        tracing::warn!("No modules define a shim - nothing to generate");
        return Ok(());
    }

    let declarations = render_shim_file(
        shims
            .iter()
            .map(|(specifier, shim)| (specifier.as_str(), *shim)),
    )?;

    let output = output.unwrap_or_else(|| PathBuf::from(&config.shim.output));
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&output, declarations)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {} module declarations to {}",
        shims.len(),
        output.display()
    );

    Ok(())
}
