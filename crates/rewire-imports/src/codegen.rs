//! Import statement rendering.

use crate::transform::{DestinationRecord, TransformedImport};

/// Render one import statement for a destination module.
///
/// Clause order is fixed: default import, namespace clause, named-import
/// list. Returns `None` for a record with no content; an empty
/// `import {} from '...'` is never emitted.
pub fn render_import(module_specifier: &str, record: &DestinationRecord) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(default) = &record.default_import {
        parts.push(default.clone());
    }

    if let Some(namespace) = &record.namespace_import {
        parts.push(format!("* as {namespace}"));
    }

    if !record.named_imports.is_empty() {
        let named = record
            .named_imports
            .iter()
            .map(|entry| {
                if entry.imported == entry.local {
                    entry.imported.clone()
                } else {
                    format!("{} as {}", entry.imported, entry.local)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("{{ {named} }}"));
    }

    if parts.is_empty() {
        return None;
    }

    let type_prefix = if record.is_type_only { "type " } else { "" };
    Some(format!(
        "import {}{} from '{}';",
        type_prefix,
        parts.join(", "),
        module_specifier
    ))
}

/// Render every non-empty destination record, in grouping order.
pub fn render_imports(transformed: &TransformedImport) -> Vec<String> {
    transformed
        .imports
        .iter()
        .filter_map(|(module, record)| render_import(module, record))
        .collect()
}
