//! Source-map loading tests against real map files on disk.

use restack::domain::StackError;
use restack::mapping::{load_source_map, PositionLookup};
use std::io::Write;

// Maps generated (0, 0) to app.js:0:0 with name "foo"
const MINIMAL_MAP: &str =
    r#"{"version":3,"sources":["app.js"],"names":["foo"],"mappings":"AAAAA"}"#;

#[test]
fn test_load_and_lookup() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(MINIMAL_MAP.as_bytes()).expect("Failed to write map");

    let map = load_source_map(file.path()).expect("Failed to load map");
    let pos = map.lookup(1, 0).expect("position should map");
    assert_eq!(pos.source, "app.js");
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 0);
    assert_eq!(pos.name.as_deref(), Some("foo"));
}

#[test]
fn test_missing_file_is_map_load_failed() {
    let err = load_source_map("/nonexistent/bundle.js.map").unwrap_err();
    match err {
        StackError::MapLoadFailed { path, .. } => {
            assert_eq!(path, "/nonexistent/bundle.js.map");
        }
        other => panic!("expected MapLoadFailed, got {other:?}"),
    }
}

#[test]
fn test_unparseable_map_is_map_load_failed() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"not a source map").expect("Failed to write");

    let err = load_source_map(file.path()).unwrap_err();
    assert!(matches!(err, StackError::MapLoadFailed { .. }));
}
