//! Source-map file loading
//!
//! Reads a source-map file from disk and exposes it through
//! [`PositionLookup`]. Maps are loaded once per resolution request and
//! are read-only afterwards; there is no caching across requests.

use crate::domain::StackError;
use crate::mapping::{OriginalPosition, PositionLookup};
use log::debug;
use sourcemap::SourceMap;
use std::fs;
use std::path::Path;

/// A parsed source-map file.
#[derive(Debug)]
pub struct SourceMapFile {
    map: SourceMap,
}

impl SourceMapFile {
    /// Parse a source map from raw JSON bytes.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a valid source map.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, sourcemap::Error> {
        Ok(Self { map: SourceMap::from_slice(bytes)? })
    }
}

impl PositionLookup for SourceMapFile {
    fn lookup(&self, line: u32, column: u32) -> Option<OriginalPosition> {
        // The map is 0-based on both axes; stack-trace lines are 1-based
        let token = self.map.lookup_token(line.checked_sub(1)?, column)?;
        let source = token.get_source()?.to_string();
        Some(OriginalPosition {
            source,
            line: token.get_src_line() + 1,
            column: token.get_src_col(),
            name: token.get_name().map(str::to_string),
        })
    }
}

/// Load and parse a source map from disk.
///
/// # Errors
/// Returns [`StackError::MapLoadFailed`] if the file cannot be read or is
/// not a valid source map. A load failure rejects the whole resolution
/// request; the resolver never sees a partially loaded map.
pub fn load_source_map<P: AsRef<Path>>(path: P) -> Result<SourceMapFile, StackError> {
    let path = path.as_ref();
    debug!("loading source map from {}", path.display());

    let bytes = fs::read(path).map_err(|e| StackError::MapLoadFailed {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    SourceMapFile::from_slice(&bytes).map_err(|e| StackError::MapLoadFailed {
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Maps generated (0, 0) to app.js:0:0 with name "foo"
    const MINIMAL_MAP: &str =
        r#"{"version":3,"sources":["app.js"],"names":["foo"],"mappings":"AAAAA"}"#;

    #[test]
    fn test_lookup_converts_line_base() {
        let map = SourceMapFile::from_slice(MINIMAL_MAP.as_bytes()).unwrap();
        let pos = map.lookup(1, 0).expect("position should map");
        assert_eq!(pos.source, "app.js");
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_lookup_line_zero_is_a_miss() {
        let map = SourceMapFile::from_slice(MINIMAL_MAP.as_bytes()).unwrap();
        assert!(map.lookup(0, 0).is_none());
    }

    #[test]
    fn test_invalid_bytes_rejected() {
        assert!(SourceMapFile::from_slice(b"not a map").is_err());
    }
}
