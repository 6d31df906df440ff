//! `rewire.toml` loading and lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use rewire_imports::TargetConfig;
use rewire_shim::ShimConfig;

/// Configuration file structure (rewire.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub shim: ShimSettings,

    /// Virtual module configurations, keyed by module name
    /// (with or without the `virtual:` prefix).
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Directory scanned for rewritable sources.
    #[serde(default = "default_source_dir")]
    pub dir: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShimSettings {
    /// Where the generated type declarations are written.
    #[serde(default = "default_shim_output")]
    pub output: String,
}

impl Default for ShimSettings {
    fn default() -> Self {
        Self {
            output: default_shim_output(),
        }
    }
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_shim_output() -> String {
    "src/typings/rewire.d.ts".to_string()
}

/// Configuration for a single virtual module.
#[derive(Debug, Deserialize)]
pub struct ModuleConfig {
    /// Shim configuration for type declaration generation.
    #[serde(default)]
    pub shim: Option<ShimConfig>,

    /// Per-target import routing, keyed by target name.
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,
}

/// Errors loading rewire.toml.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}. Run 'rewire init' to create one.")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load configuration from a rewire.toml path.
pub fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Full `virtual:` specifier for a configured module name.
///
/// Config keys may be written either way; statements in source always use
/// the full specifier.
pub fn virtual_specifier(name: &str) -> String {
    if name.starts_with("virtual:") {
        name.to_string()
    } else {
        format!("virtual:{name}")
    }
}
