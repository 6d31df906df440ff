//! Initialize a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    let config_path = Path::new("rewire.toml");

    if config_path.exists() && !yes {
        tracing::warn!("rewire.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG).context("Failed to write rewire.toml")?;
    tracing::info!("Created rewire.toml");
    tracing::info!("Configure your virtual modules, then run 'rewire rewrite --target <name>'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Rewire configuration

[source]
# Directory scanned for rewritable sources
dir = "src"

[shim]
# Where generated type declarations are written
output = "src/typings/rewire.d.ts"

# One section per virtual module. Imports of 'virtual:lucide' are rewritten
# per target; the shim declares the module for editors and type checkers.
[modules.lucide]
shim = "lucide-react"

[modules.lucide.targets]
react = "lucide-react"
vue = "lucide-vue-next"

# Per-symbol routing with a '*' catch-all for everything unlisted.
#
# [modules.flow.targets.react]
# Flow = { from = "@xyflow/react", symbol = "ReactFlow" }
# "*" = "@xyflow/react"
"#;
