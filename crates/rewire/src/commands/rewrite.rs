//! Source-tree rewrite command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use rewire_imports::TargetConfig;

use crate::config::{virtual_specifier, ConfigFile};

/// Extensions eligible for rewriting.
const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "vue", "svelte"];

/// Per-file outcome of the rewrite pass.
struct FileOutcome {
    rewritten: usize,
    unresolved: usize,
    changed: bool,
}

/// Run the rewrite command.
pub fn run(config: &ConfigFile, target: &str, dir: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let routes: Vec<(String, &TargetConfig)> = config
        .modules
        .iter()
        .filter_map(|(name, module)| {
            module
                .targets
                .get(target)
                .map(|target_config| (virtual_specifier(name), target_config))
        })
        .collect();

    if routes.is_empty() {
        tracing::warn!("No modules configure target '{}' - nothing to do", target);
        return Ok(());
    }

    let root = dir.unwrap_or_else(|| PathBuf::from(&config.source.dir));
    if !root.exists() {
        anyhow::bail!("Source directory not found: {}", root.display());
    }

    let files = discover_sources(&root);
    tracing::debug!("Scanning {} source files under {}", files.len(), root.display());

    let outcomes: Vec<Result<FileOutcome>> = files
        .par_iter()
        .map(|path| rewrite_file(path, &routes, dry_run))
        .collect();

    let mut changed_files = 0;
    let mut statements = 0;
    let mut unresolved = 0;

    for outcome in outcomes {
        let outcome = outcome?;
        if outcome.changed {
            changed_files += 1;
        }
        statements += outcome.rewritten;
        unresolved += outcome.unresolved;
    }

    if dry_run {
        tracing::info!(
            "Would rewrite {} statements across {} files for target '{}'",
            statements,
            changed_files,
            target
        );
    } else {
        tracing::info!(
            "Rewrote {} statements across {} files for target '{}'",
            statements,
            changed_files,
            target
        );
    }

    if unresolved > 0 {
        tracing::warn!(
            "{} symbols had no mapping for target '{}' and were dropped",
            unresolved,
            target
        );
    }

    Ok(())
}

/// Collect rewritable source files under a root directory.
fn discover_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            SOURCE_EXTENSIONS.contains(&ext)
        })
        .collect()
}

/// Apply every configured module route to one file.
fn rewrite_file(
    path: &Path,
    routes: &[(String, &TargetConfig)],
    dry_run: bool,
) -> Result<FileOutcome> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut code = source.clone();
    let mut rewritten = 0;
    let mut unresolved = 0;

    for (specifier, target_config) in routes {
        let result = rewire_imports::rewrite_imports(&code, specifier, target_config);
        rewritten += result.rewritten;
        unresolved += result.unresolved.len();
        code = result.code;
    }

    let changed = code != source;
    if changed && !dry_run {
        fs::write(path, &code).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Rewrote {}", path.display());
    }

    Ok(FileOutcome {
        rewritten,
        unresolved,
        changed,
    })
}
