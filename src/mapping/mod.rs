//! Source-map position lookup
//!
//! The resolver only needs one capability from a source map: a read-only
//! (generated line, generated column) -> original position query. That
//! capability is the [`PositionLookup`] trait, so tests can substitute a
//! table-backed stub and the resolver never depends on the map format.
//!
//! The production implementation in [`loader`] wraps a parsed source-map
//! file. A miss is `None`, never an error: unmapped positions are a
//! normal, expected outcome.

pub mod loader;

pub use loader::{load_source_map, SourceMapFile};

use serde::Serialize;

/// An original-source position recovered from a source map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalPosition {
    /// Original source file.
    pub source: String,
    /// 1-based line in the original source.
    pub line: u32,
    /// 0-based column, as the source-map format counts them.
    pub column: u32,
    /// Original symbol name, when the map recorded one.
    pub name: Option<String>,
}

/// Read-only lookup from a generated position to an original one.
///
/// Lines are 1-based as they appear in stack traces; columns are 0-based
/// as the source-map format counts them.
pub trait PositionLookup {
    /// Look up a generated position. `None` means the map has no entry
    /// for it.
    fn lookup(&self, line: u32, column: u32) -> Option<OriginalPosition>;
}
