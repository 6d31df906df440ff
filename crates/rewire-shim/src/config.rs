//! Shim configuration shapes.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Per-package shim configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PackageShim {
    /// Emit `export * from "package";`.
    #[serde(default)]
    pub reexport_all: bool,

    /// Symbol aliases: local name -> exported name.
    /// `Flow = "ReactFlow"` emits `export { ReactFlow as Flow } from "package";`
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// How one package participates in a module's shim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PackageEntry {
    /// `"*"` shorthand for re-exporting everything.
    Shorthand(String),
    Config(PackageShim),
}

/// Shim configuration for one virtual module.
///
/// Either a single package name (re-export everything from it) or a
/// per-package map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ShimConfig {
    Package(String),
    Packages(BTreeMap<String, PackageEntry>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_single_package_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            shim: ShimConfig,
        }

        let wrapper: Wrapper = toml::from_str(r#"shim = "lucide-react""#).unwrap();

        assert_eq!(wrapper.shim, ShimConfig::Package("lucide-react".to_string()));
    }

    #[test]
    fn deserializes_per_package_map() {
        let config: ShimConfig = toml::from_str(
            r#"
            "@xyflow/react" = { reexport_all = true, aliases = { Flow = "ReactFlow" } }
            "@xyflow/background" = "*"
            "#,
        )
        .unwrap();

        let ShimConfig::Packages(packages) = config else {
            panic!("expected a package map");
        };

        assert_eq!(
            packages.get("@xyflow/background"),
            Some(&PackageEntry::Shorthand("*".to_string()))
        );
        let PackageEntry::Config(shim) = &packages["@xyflow/react"] else {
            panic!("expected a package config");
        };
        assert!(shim.reexport_all);
        assert_eq!(shim.aliases.get("Flow"), Some(&"ReactFlow".to_string()));
    }
}
