//! Source-to-source rewriting of virtual-module imports.
//!
//! Runs the full pipeline over a text buffer: locate statements for one
//! module specifier, parse each, route its symbols per the target config,
//! and splice the regenerated statements over the original text.

use crate::codegen::render_imports;
use crate::config::TargetConfig;
use crate::locator::find_imports;
use crate::parser::parse_import_statement;
use crate::transform::{transform_import, UnresolvedSymbol};

/// Result of rewriting one module's imports in a source buffer.
#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    /// The rewritten source text.
    pub code: String,

    /// Number of statements that were replaced.
    pub rewritten: usize,

    /// Statements left untouched because they did not match the supported
    /// grammar.
    pub skipped: usize,

    /// Symbols dropped because no mapping and no catch-all applied.
    pub unresolved: Vec<UnresolvedSymbol>,
}

impl RewriteResult {
    /// Whether the buffer was modified.
    pub fn changed(&self) -> bool {
        self.rewritten > 0
    }
}

/// Rewrite every import of `module_specifier` in `code` per `config`.
///
/// Each generated statement inherits the indentation of the statement it
/// replaces. Statements whose symbols all fail to resolve are removed.
/// Unparseable statements are skipped and survive verbatim; nothing here
/// aborts the pass.
pub fn rewrite_imports(
    code: &str,
    module_specifier: &str,
    config: &TargetConfig,
) -> RewriteResult {
    let mut result = RewriteResult {
        code: code.to_string(),
        ..Default::default()
    };

    for found in find_imports(code, module_specifier) {
        let mut parsed = match parse_import_statement(&found.statement) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!("Skipping unsupported import statement: {}", err);
                result.skipped += 1;
                continue;
            }
        };
        parsed.original = found.original.clone();

        let mut transformed = transform_import(&parsed, config);
        result.unresolved.append(&mut transformed.unresolved);

        let replacement = render_imports(&transformed)
            .iter()
            .map(|statement| format!("{}{}", found.indent, statement))
            .collect::<Vec<_>>()
            .join("\n");

        result.code = result.code.replacen(&parsed.original, &replacement, 1);
        result.rewritten += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetConfig;
    use crate::parser::parse_import_statement;
    use pretty_assertions::assert_eq;

    fn symbols(config: &str) -> TargetConfig {
        serde_json::from_str(config).unwrap()
    }

    #[test]
    fn rewrites_statement_in_place() {
        let code = "const x = 1;\nimport { Flow, Background as Bg } from 'virtual:flow';\nconst y = 2;\n";
        let config = symbols(
            r#"{ "Flow": { "from": "@xyflow/react", "symbol": "ReactFlow" }, "*": "@xyflow/core" }"#,
        );

        let result = rewrite_imports(code, "virtual:flow", &config);

        assert_eq!(result.rewritten, 1);
        assert_eq!(
            result.code,
            "const x = 1;\nimport { ReactFlow as Flow } from '@xyflow/react';\nimport { Background as Bg } from '@xyflow/core';\nconst y = 2;\n"
        );
    }

    #[test]
    fn rewrites_type_only_statement_with_string_config() {
        let code = "import type { A } from 'virtual:x';\n";

        let result = rewrite_imports(code, "virtual:x", &TargetConfig::Module("my-lib".into()));

        assert_eq!(result.code, "import type { A } from 'my-lib';\n");
    }

    #[test]
    fn reports_unresolved_and_keeps_resolved_symbols() {
        let code = "import X, { Y } from 'virtual:x';\n";
        let config = symbols(r#"{ "Y": "lib-y" }"#);

        let result = rewrite_imports(code, "virtual:x", &config);

        assert_eq!(result.code, "import { Y } from 'lib-y';\n");
        assert_eq!(result.unresolved.len(), 1);
        assert_eq!(result.unresolved[0].name, "X");
    }

    #[test]
    fn rewrites_namespace_through_catch_all() {
        let code = "import * as NS from 'virtual:x';\n";
        let config = symbols(r#"{ "*": { "from": "lib-ns" } }"#);

        let result = rewrite_imports(code, "virtual:x", &config);

        assert_eq!(result.code, "import * as NS from 'lib-ns';\n");
    }

    #[test]
    fn preserves_indentation_on_replacement_lines() {
        let code = "<script>\n    import { A, B } from 'virtual:x';\n</script>\n";
        let config = symbols(r#"{ "A": "lib-a", "B": "lib-b" }"#);

        let result = rewrite_imports(code, "virtual:x", &config);

        assert_eq!(
            result.code,
            "<script>\n    import { A } from 'lib-a';\n    import { B } from 'lib-b';\n</script>\n"
        );
    }

    #[test]
    fn leaves_other_modules_untouched() {
        let code = "import { A } from 'virtual:x';\nimport { B } from 'somewhere-else';\n";

        let result = rewrite_imports(code, "virtual:x", &TargetConfig::Module("lib-a".into()));

        assert!(result.code.contains("import { A } from 'lib-a';"));
        assert!(result.code.contains("import { B } from 'somewhere-else';"));
    }

    #[test]
    fn skips_unparseable_statement() {
        // Multi-line statements match the locator but not the statement
        // grammar; they must survive verbatim.
        let code = "import {\n  A,\n  B\n} from 'virtual:x';\n";

        let result = rewrite_imports(code, "virtual:x", &TargetConfig::Module("lib-a".into()));

        assert_eq!(result.rewritten, 0);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.code, code);
    }

    #[test]
    fn removes_statement_when_nothing_resolves() {
        let code = "import { A } from 'virtual:x';\n";
        let config = symbols(r#"{ "B": "lib-b" }"#);

        let result = rewrite_imports(code, "virtual:x", &config);

        assert_eq!(result.code, "\n");
        assert_eq!(result.unresolved.len(), 1);
    }

    #[test]
    fn rewrites_multiple_statements() {
        let code = "import { A } from 'virtual:x';\nimport { B } from 'virtual:x';\n";
        let config = symbols(r#"{ "*": "lib-x" }"#);

        let result = rewrite_imports(code, "virtual:x", &config);

        assert_eq!(result.rewritten, 2);
        assert_eq!(
            result.code,
            "import { A } from 'lib-x';\nimport { B } from 'lib-x';\n"
        );
    }

    #[test]
    fn identity_catch_all_round_trips() {
        let code = "import X, { A, B as C } from 'virtual:x';\n";
        let config = symbols(r#"{ "*": "virtual:x" }"#);

        let result = rewrite_imports(code, "virtual:x", &config);
        let reparsed = parse_import_statement(result.code.trim()).unwrap();
        let original = parse_import_statement(code.trim()).unwrap();

        assert_eq!(reparsed.named_imports, original.named_imports);
        assert_eq!(reparsed.default_import, original.default_import);
        assert_eq!(reparsed.module_specifier, original.module_specifier);
    }

    #[test]
    fn never_emits_empty_brace_imports() {
        let codes = [
            "import { A } from 'virtual:x';\n",
            "import X from 'virtual:x';\n",
            "import * as NS from 'virtual:x';\n",
        ];
        let configs = [
            symbols(r#"{ "B": "lib-b" }"#),
            symbols(r#"{ "*": "lib-x" }"#),
            TargetConfig::Module("lib-x".into()),
        ];

        for code in &codes {
            for config in &configs {
                let result = rewrite_imports(code, "virtual:x", config);
                assert!(!result.code.contains("import {  }"));
                assert!(!result.code.contains("import {} from"));
            }
        }
    }
}
