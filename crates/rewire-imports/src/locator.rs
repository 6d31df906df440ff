//! Statement locator for a single module specifier.

use regex::Regex;

/// One matched import statement in a source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch {
    /// Full matched text including leading indentation. This is the exact
    /// substring a rewriting pass must replace.
    pub original: String,

    /// Leading whitespace of the matched line.
    pub indent: String,

    /// The isolated statement, trimmed, ready for parsing.
    pub statement: String,
}

/// Find every import statement referencing `module_specifier` in `code`.
///
/// Matches both `import` and `import type` forms and tolerates leading
/// indentation, so imports inside indented script blocks are still found.
/// The specifier is matched exactly: statements referencing a module that
/// merely contains the target as a substring are not matched. Scanning the
/// same text twice yields the same matches.
pub fn find_imports(code: &str, module_specifier: &str) -> Vec<ImportMatch> {
    let escaped = regex::escape(module_specifier);
    let pattern = format!(
        r#"(?m)^([ \t]*)(import\s+(?:type\s+)?[^;]+\s+from\s+['"]{escaped}['"][ \t]*;?)[ \t]*$"#
    );
    let regex = Regex::new(&pattern).expect("Invalid import locator regex");

    regex
        .captures_iter(code)
        .map(|caps| ImportMatch {
            original: caps.get(0).map(|m| m.as_str()).unwrap_or("").trim_end().to_string(),
            indent: caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
            statement: caps.get(2).map(|m| m.as_str()).unwrap_or("").trim().to_string(),
        })
        .collect()
}
