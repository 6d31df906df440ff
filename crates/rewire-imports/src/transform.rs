//! Symbol resolution and destination grouping.
//!
//! Routes every symbol of a parsed import to its destination module per the
//! target configuration: exact match on the imported name first, then the
//! `"*"` catch-all, otherwise the symbol is dropped and reported. Symbols
//! resolving to the same destination are merged into one record.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::{SymbolTarget, TargetConfig};
use crate::parser::ParsedImport;

/// Reserved routing key for symbols with no explicit mapping.
pub const CATCH_ALL: &str = "*";

/// One named-import pair after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedImport {
    /// Name exported by the destination module.
    pub imported: String,
    /// Local binding name.
    pub local: String,
}

/// Accumulated imports for one destination module, prior to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationRecord {
    /// Named entries in first-seen order.
    pub named_imports: Vec<NamedImport>,

    /// Default import name, if one was routed here.
    pub default_import: Option<String>,

    /// Namespace import name, if one was routed here.
    pub namespace_import: Option<String>,

    /// Whether the rendered statement gets a `type` qualifier.
    pub is_type_only: bool,
}

/// Result of transforming one parsed import against a target config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformedImport {
    /// Destination module specifier -> grouped import data, in the order
    /// destinations were first seen.
    pub imports: IndexMap<String, DestinationRecord>,

    /// Symbols that had no mapping and no catch-all. Dropped from output.
    pub unresolved: Vec<UnresolvedSymbol>,
}

/// A symbol that could not be routed anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedSymbol {
    /// The imported name (default/namespace symbols report the local name).
    pub name: String,
    pub kind: SymbolKind,
}

/// Which import form an unresolved symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Named,
    Type,
    Default,
    Namespace,
}

/// Outcome of looking up one symbol in a symbol map.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Resolved {
        module: String,
        imported: String,
        local: String,
    },
    Unresolved,
}

/// Transform a parsed import according to the target configuration.
pub fn transform_import(parsed: &ParsedImport, config: &TargetConfig) -> TransformedImport {
    match config {
        TargetConfig::Module(module) => transform_to_single_module(parsed, module),
        TargetConfig::Symbols(symbols) => transform_by_symbol(parsed, symbols),
    }
}

/// Bare string config: every symbol comes from the one module, unchanged.
fn transform_to_single_module(parsed: &ParsedImport, module: &str) -> TransformedImport {
    let mut record = DestinationRecord {
        default_import: parsed.default_import.clone(),
        namespace_import: parsed.namespace_import.clone(),
        is_type_only: parsed.is_type_only,
        ..Default::default()
    };

    for (local, imported) in &parsed.named_imports {
        record.named_imports.push(NamedImport {
            imported: imported.clone(),
            local: local.clone(),
        });
    }

    // Type-only entries fold into the same destination record.
    for (local, imported) in &parsed.type_imports {
        record.named_imports.push(NamedImport {
            imported: imported.clone(),
            local: local.clone(),
        });
    }

    let mut result = TransformedImport::default();
    result.imports.insert(module.to_string(), record);
    result
}

/// Symbol-map config: route each symbol through the two-tier lookup.
fn transform_by_symbol(
    parsed: &ParsedImport,
    symbols: &HashMap<String, SymbolTarget>,
) -> TransformedImport {
    let mut result = TransformedImport::default();
    let catch_all = symbols.get(CATCH_ALL);

    for (local, imported) in &parsed.named_imports {
        match resolve_symbol(symbols, catch_all, local, imported) {
            Resolution::Resolved {
                module,
                imported,
                local,
            } => {
                push_named(&mut result, module, imported, local, parsed.is_type_only);
            }
            Resolution::Unresolved => {
                tracing::warn!("Symbol '{}' has no mapping and no '*' catch-all", imported);
                result.unresolved.push(UnresolvedSymbol {
                    name: imported.clone(),
                    kind: SymbolKind::Named,
                });
            }
        }
    }

    for (local, imported) in &parsed.type_imports {
        match resolve_symbol(symbols, catch_all, local, imported) {
            Resolution::Resolved {
                module,
                imported,
                local,
            } => {
                push_named(&mut result, module, imported, local, true);
            }
            Resolution::Unresolved => {
                tracing::warn!(
                    "Type symbol '{}' has no mapping and no '*' catch-all",
                    imported
                );
                result.unresolved.push(UnresolvedSymbol {
                    name: imported.clone(),
                    kind: SymbolKind::Type,
                });
            }
        }
    }

    // Default and namespace imports carry no imported name to look up, so
    // only the catch-all can route them.
    if let Some(default) = &parsed.default_import {
        match catch_all {
            Some(target) => {
                let record = destination(&mut result, target.module(), parsed.is_type_only);
                record.default_import = Some(default.clone());
            }
            None => {
                tracing::warn!(
                    "Default import '{}' cannot be routed without a '*' catch-all",
                    default
                );
                result.unresolved.push(UnresolvedSymbol {
                    name: default.clone(),
                    kind: SymbolKind::Default,
                });
            }
        }
    }

    if let Some(namespace) = &parsed.namespace_import {
        match catch_all {
            Some(target) => {
                let record = destination(&mut result, target.module(), parsed.is_type_only);
                record.namespace_import = Some(namespace.clone());
            }
            None => {
                tracing::warn!(
                    "Namespace import '* as {}' cannot be routed without a '*' catch-all",
                    namespace
                );
                result.unresolved.push(UnresolvedSymbol {
                    name: namespace.clone(),
                    kind: SymbolKind::Namespace,
                });
            }
        }
    }

    result
}

/// Two-tier lookup: exact imported-name match, then the catch-all.
fn resolve_symbol(
    symbols: &HashMap<String, SymbolTarget>,
    catch_all: Option<&SymbolTarget>,
    local: &str,
    imported: &str,
) -> Resolution {
    match symbols.get(imported) {
        Some(SymbolTarget::Source(source)) => {
            // With an exported-name override the local binding becomes the
            // original imported name, preserving the caller's alias.
            let (final_imported, final_local) = match &source.symbol {
                Some(symbol) => (symbol.clone(), imported.to_string()),
                None => (imported.to_string(), local.to_string()),
            };
            Resolution::Resolved {
                module: source.from.clone(),
                imported: final_imported,
                local: final_local,
            }
        }
        Some(SymbolTarget::Module(module)) => Resolution::Resolved {
            module: module.clone(),
            imported: imported.to_string(),
            local: local.to_string(),
        },
        // The catch-all routes by module only; a `symbol` override on the
        // catch-all entry never renames.
        None => match catch_all {
            Some(target) => Resolution::Resolved {
                module: target.module().to_string(),
                imported: imported.to_string(),
                local: local.to_string(),
            },
            None => Resolution::Unresolved,
        },
    }
}

fn push_named(
    result: &mut TransformedImport,
    module: String,
    imported: String,
    local: String,
    is_type_only: bool,
) {
    let record = destination(result, &module, is_type_only);
    record.named_imports.push(NamedImport { imported, local });
}

/// Fetch or create the record for a destination module. The type-only flag
/// is fixed when the record is first created.
fn destination<'a>(
    result: &'a mut TransformedImport,
    module: &str,
    is_type_only: bool,
) -> &'a mut DestinationRecord {
    result
        .imports
        .entry(module.to_string())
        .or_insert_with(|| DestinationRecord {
            is_type_only,
            ..Default::default()
        })
}
