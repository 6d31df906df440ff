//! `declare module` block rendering.

use crate::config::{PackageEntry, ShimConfig};

const HEADER: &str = "// Generated by rewire. Do not edit.";

/// Errors that can occur while rendering shim declarations.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("Invalid shorthand '{value}' for package '{package}': only \"*\" is recognized")]
    InvalidShorthand { package: String, value: String },
}

/// Render the declaration block for one virtual module.
///
/// Aliases render before any `export *` so the named re-exports read first,
/// and alias order follows the sorted local names, keeping output stable
/// across runs.
pub fn render_module_shim(module_specifier: &str, config: &ShimConfig) -> Result<String, ShimError> {
    let mut lines = Vec::new();

    match config {
        ShimConfig::Package(package) => {
            lines.push(format!("  export * from \"{package}\";"));
        }
        ShimConfig::Packages(packages) => {
            for (package, entry) in packages {
                match entry {
                    PackageEntry::Shorthand(value) if value == "*" => {
                        lines.push(format!("  export * from \"{package}\";"));
                    }
                    PackageEntry::Shorthand(value) => {
                        return Err(ShimError::InvalidShorthand {
                            package: package.clone(),
                            value: value.clone(),
                        });
                    }
                    PackageEntry::Config(shim) => {
                        for (local, exported) in &shim.aliases {
                            lines.push(format!(
                                "  export {{ {exported} as {local} }} from \"{package}\";"
                            ));
                        }
                        if shim.reexport_all {
                            lines.push(format!("  export * from \"{package}\";"));
                        }
                    }
                }
            }
        }
    }

    Ok(format!(
        "declare module '{module_specifier}' {{\n{}\n}}",
        lines.join("\n")
    ))
}

/// Assemble the full declaration file for a set of modules.
pub fn render_shim_file<'a>(
    modules: impl IntoIterator<Item = (&'a str, &'a ShimConfig)>,
) -> Result<String, ShimError> {
    let mut blocks = vec![HEADER.to_string()];

    for (module_specifier, config) in modules {
        blocks.push(render_module_shim(module_specifier, config)?);
    }

    Ok(format!("{}\n", blocks.join("\n\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageShim;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn renders_single_package_reexport() {
        let config = ShimConfig::Package("lucide-react".to_string());

        let block = render_module_shim("virtual:lucide", &config).unwrap();

        assert_eq!(
            block,
            "declare module 'virtual:lucide' {\n  export * from \"lucide-react\";\n}"
        );
    }

    #[test]
    fn renders_aliases_and_star_reexport() {
        let mut aliases = BTreeMap::new();
        aliases.insert("Flow".to_string(), "ReactFlow".to_string());
        let mut packages = BTreeMap::new();
        packages.insert(
            "@xyflow/react".to_string(),
            PackageEntry::Config(PackageShim {
                reexport_all: true,
                aliases,
            }),
        );
        packages.insert(
            "@xyflow/background".to_string(),
            PackageEntry::Shorthand("*".to_string()),
        );

        let block =
            render_module_shim("virtual:flow", &ShimConfig::Packages(packages)).unwrap();

        assert_eq!(
            block,
            "declare module 'virtual:flow' {\n  \
             export * from \"@xyflow/background\";\n  \
             export { ReactFlow as Flow } from \"@xyflow/react\";\n  \
             export * from \"@xyflow/react\";\n}"
        );
    }

    #[test]
    fn rejects_unknown_shorthand() {
        let mut packages = BTreeMap::new();
        packages.insert(
            "some-lib".to_string(),
            PackageEntry::Shorthand("**".to_string()),
        );

        let err = render_module_shim("virtual:x", &ShimConfig::Packages(packages)).unwrap_err();

        assert!(matches!(err, ShimError::InvalidShorthand { .. }));
    }

    #[test]
    fn assembles_file_with_header() {
        let first = ShimConfig::Package("lib-a".to_string());
        let second = ShimConfig::Package("lib-b".to_string());

        let file = render_shim_file([
            ("virtual:a", &first),
            ("virtual:b", &second),
        ])
        .unwrap();

        assert!(file.starts_with("// Generated by rewire."));
        assert!(file.contains("declare module 'virtual:a'"));
        assert!(file.contains("declare module 'virtual:b'"));
        assert!(file.ends_with("}\n"));
    }
}
