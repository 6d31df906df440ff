//! Type declaration shim generation for virtual modules.
//!
//! Editors and type checkers see virtual modules as unresolvable specifiers.
//! This crate renders a `.d.ts` file of `declare module` blocks that
//! re-export the real packages behind each virtual module, using the same
//! alias vocabulary the import rewriter routes with.

pub mod config;
pub mod declarations;

pub use config::{PackageEntry, PackageShim, ShimConfig};
pub use declarations::{render_module_shim, render_shim_file, ShimError};
