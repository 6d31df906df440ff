//! Routing configuration for virtual-module symbols.

use std::collections::HashMap;

use serde::Deserialize;

/// Where a symbol comes from in the target framework.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolSource {
    /// Target module to import from.
    pub from: String,

    /// Exported name in the target module, when it differs from the name
    /// the virtual module exposes.
    ///
    /// `Flow = { from = "@xyflow/react", symbol = "ReactFlow" }` generates
    /// `import { ReactFlow as Flow } from '@xyflow/react';`
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A single routing entry: a bare module specifier, or a full source with an
/// optional exported-name override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SymbolTarget {
    Module(String),
    Source(SymbolSource),
}

impl SymbolTarget {
    /// Destination module specifier for this entry.
    pub fn module(&self) -> &str {
        match self {
            SymbolTarget::Module(module) => module,
            SymbolTarget::Source(source) => &source.from,
        }
    }
}

/// How one virtual module maps onto a compilation target.
///
/// Either a single module specifier (every symbol comes from that module,
/// names unchanged), or a per-symbol map keyed by *imported* name with an
/// optional `"*"` catch-all for anything not listed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TargetConfig {
    Module(String),
    Symbols(HashMap<String, SymbolTarget>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_bare_module_config() {
        let config: TargetConfig = serde_json::from_str(r#""lucide-react""#).unwrap();

        assert_eq!(config, TargetConfig::Module("lucide-react".to_string()));
    }

    #[test]
    fn deserializes_symbol_map_config() {
        let config: TargetConfig = serde_json::from_str(
            r#"{
                "Flow": { "from": "@xyflow/react", "symbol": "ReactFlow" },
                "Background": "@xyflow/background",
                "*": "@xyflow/core"
            }"#,
        )
        .unwrap();

        let TargetConfig::Symbols(symbols) = config else {
            panic!("expected a symbol map");
        };

        assert_eq!(
            symbols.get("Flow"),
            Some(&SymbolTarget::Source(SymbolSource {
                from: "@xyflow/react".to_string(),
                symbol: Some("ReactFlow".to_string()),
            }))
        );
        assert_eq!(
            symbols.get("Background"),
            Some(&SymbolTarget::Module("@xyflow/background".to_string()))
        );
        assert_eq!(symbols.get("*").map(SymbolTarget::module), Some("@xyflow/core"));
    }

    #[test]
    fn deserializes_from_toml_tables() {
        let config: TargetConfig = toml::from_str(
            r#"
            Flow = { from = "@vue-flow/core", symbol = "VueFlow" }
            "*" = "@vue-flow/core"
            "#,
        )
        .unwrap();

        let TargetConfig::Symbols(symbols) = config else {
            panic!("expected a symbol map");
        };

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols.get("*").map(SymbolTarget::module), Some("@vue-flow/core"));
    }

    #[test]
    fn source_without_override_keeps_name() {
        let target: SymbolTarget =
            serde_json::from_str(r#"{ "from": "lib-ns" }"#).unwrap();

        assert_eq!(
            target,
            SymbolTarget::Source(SymbolSource {
                from: "lib-ns".to_string(),
                symbol: None,
            })
        );
        assert_eq!(target.module(), "lib-ns");
    }
}
