//! Import statement parser.
//!
//! Parses one raw `import` statement into a structured record. Handles named
//! imports, renames, default imports, namespace imports, mixed forms, and
//! both whole-statement and inline `type` qualifiers.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// A structurally parsed `import` statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedImport {
    /// Exact statement text as handed to the parser. Callers that located
    /// the statement in a larger buffer overwrite this with the full match,
    /// indentation included, so it can be replaced verbatim.
    pub original: String,

    /// Named imports: local binding name -> imported name.
    /// `import { A as B }` stores `B -> A`.
    pub named_imports: IndexMap<String, String>,

    /// Type-only named imports, same shape as `named_imports`.
    pub type_imports: IndexMap<String, String>,

    /// Default import binding, if present.
    pub default_import: Option<String>,

    /// Namespace binding from `* as X`, if present.
    pub namespace_import: Option<String>,

    /// The module specifier the statement references.
    pub module_specifier: String,

    /// Whether the whole statement used `import type`.
    pub is_type_only: bool,
}

/// Errors for statements that do not match the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Not an import statement: {0}")]
    NotAnImport(String),

    #[error("Unsupported import clause: {0}")]
    UnsupportedClause(String),

    #[error("Unbalanced braces in import clause: {0}")]
    UnbalancedBraces(String),
}

static STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^import\s+(type\s+)?(.+?)\s+from\s+['"]([^'"]+)['"]\s*;?\s*$"#)
        .expect("Invalid import statement regex")
});

static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s+as\s+(\w+)$").expect("Invalid namespace regex"));

static RENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+as\s+(\w+)$").expect("Invalid rename regex"));

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("Invalid identifier regex"));

/// Parse a single import statement into structured data.
///
/// The clause between `import` and `from` is split into top-level segments
/// (brace-aware, comma-separated) and each segment is classified as a
/// namespace import, a named-import list, or a default import. Clauses that
/// fit none of those forms fail; the caller is expected to skip the
/// statement and leave it unmodified in the source.
pub fn parse_import_statement(statement: &str) -> Result<ParsedImport, ParseError> {
    let trimmed = statement.trim();

    let caps = STATEMENT_RE
        .captures(trimmed)
        .ok_or_else(|| ParseError::NotAnImport(trimmed.to_string()))?;

    let is_type_only = caps.get(1).is_some();
    let clause = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
    let module_specifier = caps.get(3).map(|m| m.as_str()).unwrap_or("").to_string();

    let mut result = ParsedImport {
        original: statement.to_string(),
        module_specifier,
        is_type_only,
        ..Default::default()
    };

    for segment in split_clause(clause)? {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        if let Some(ns) = NAMESPACE_RE.captures(segment) {
            if result.namespace_import.is_some() {
                return Err(ParseError::UnsupportedClause(clause.to_string()));
            }
            result.namespace_import = Some(ns[1].to_string());
        } else if segment.starts_with('{') {
            parse_named_list(segment, clause, &mut result)?;
        } else if IDENT_RE.is_match(segment) {
            if result.default_import.is_some() {
                return Err(ParseError::UnsupportedClause(clause.to_string()));
            }
            result.default_import = Some(segment.to_string());
        } else {
            return Err(ParseError::UnsupportedClause(clause.to_string()));
        }
    }

    // A clause binding nothing at all is not a valid import.
    if result.default_import.is_none()
        && result.namespace_import.is_none()
        && result.named_imports.is_empty()
        && result.type_imports.is_empty()
    {
        return Err(ParseError::UnsupportedClause(clause.to_string()));
    }

    Ok(result)
}

/// Split an import clause on top-level commas, keeping brace groups intact.
fn split_clause(clause: &str) -> Result<Vec<&str>, ParseError> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in clause.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::UnbalancedBraces(clause.to_string()))?;
            }
            ',' if depth == 0 => {
                segments.push(&clause[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedBraces(clause.to_string()));
    }

    segments.push(&clause[start..]);
    Ok(segments)
}

/// Parse a `{ A, B as C, type D }` group into the named/type maps.
fn parse_named_list(
    segment: &str,
    clause: &str,
    result: &mut ParsedImport,
) -> Result<(), ParseError> {
    let inner = segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| ParseError::UnsupportedClause(clause.to_string()))?;

    for entry in inner.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        // An inline `type` prefix marks this symbol type-only regardless of
        // the statement-level qualifier.
        let (is_type, entry) = match entry.strip_prefix("type ") {
            Some(rest) => (true, rest.trim()),
            None => (false, entry),
        };

        let (imported, local) = if let Some(rename) = RENAME_RE.captures(entry) {
            (rename[1].to_string(), rename[2].to_string())
        } else if IDENT_RE.is_match(entry) {
            (entry.to_string(), entry.to_string())
        } else {
            return Err(ParseError::UnsupportedClause(clause.to_string()));
        };

        if is_type {
            result.type_imports.insert(local, imported);
        } else {
            result.named_imports.insert(local, imported);
        }
    }

    Ok(())
}
