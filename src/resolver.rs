//! Frame resolution: position correction, map lookup, and formatting.
//!
//! Consumes the parser's [`RawFrame`] sequence and produces exactly one
//! [`ResolvedFrame`] per input, in order. Each frame is classified,
//! corrected for the engine's bundle-wrapping offsets, looked up in the
//! appropriate map, and formatted; a miss falls back to the original,
//! uncorrected frame text. Per-frame anomalies never abort the batch.

use crate::classification::{classify_frame, FrameKind};
use crate::domain::{RawFrame, ResolvedFrame, StackError};
use crate::mapping::{load_source_map, OriginalPosition, PositionLookup};
use crate::parser::{parse_frames, RawStack};
use log::{debug, info, warn};
use std::path::Path;

/// Two header lines are injected above the bundle, and V8's dynamic
/// `Function` compilation path prepends two more before the bundle
/// contents. Bundle lines therefore arrive four past the map's.
const V8_BUNDLE_LINE_OFFSET: u32 = 4;

/// JSC's bundle wrapping inserts three header lines.
const JSC_BUNDLE_LINE_OFFSET: u32 = 3;

/// JSC reports bundle columns one past what the map expects. Empirical;
/// column 0 has never been observed, see [`correct_jsc_column`].
const JSC_BUNDLE_COLUMN_OFFSET: u32 = 1;

fn correct_v8_line(line: u32) -> u32 {
    line.saturating_sub(V8_BUNDLE_LINE_OFFSET)
}

fn correct_jsc_line(line: u32) -> u32 {
    line.saturating_sub(JSC_BUNDLE_LINE_OFFSET)
}

fn correct_jsc_column(column: u32) -> u32 {
    if column < JSC_BUNDLE_COLUMN_OFFSET {
        // Unverified boundary: the offset is empirical and no trace with
        // column 0 has been seen
        warn!("JSC bundle column {column} underflows the correction, clamping to 0");
    }
    column.saturating_sub(JSC_BUNDLE_COLUMN_OFFSET)
}

/// Resolve parsed frames against the shim and bundle maps.
///
/// Length- and order-preserving: exactly one resolved frame per raw frame.
/// A lookup miss is an expected outcome, logged at debug level; the frame
/// falls back to its original text.
pub fn resolve_frames(
    shim_map: &dyn PositionLookup,
    bundle_map: &dyn PositionLookup,
    frames: &[RawFrame],
) -> Vec<ResolvedFrame> {
    frames.iter().map(|frame| resolve_frame(shim_map, bundle_map, frame)).collect()
}

/// Classify, correct, look up, and format a single frame.
fn resolve_frame(
    shim_map: &dyn PositionLookup,
    bundle_map: &dyn PositionLookup,
    frame: &RawFrame,
) -> ResolvedFrame {
    match classify_frame(frame) {
        // Shim frames map directly, no correction
        FrameKind::Shim => {
            match lookup_at(shim_map, frame.line_number(), frame.column_number()) {
                Some(pos) => ResolvedFrame::new(format_mapped(&pos)),
                None => miss(frame),
            }
        }

        FrameKind::V8Bundle => {
            let corrected = frame.line_number().map(correct_v8_line);
            match lookup_at(bundle_map, corrected, frame.column_number()) {
                Some(pos) => ResolvedFrame::new(format_mapped(&pos)),
                None => miss(frame),
            }
        }

        FrameKind::JscBundle { line, column, function } => {
            match bundle_map.lookup(correct_jsc_line(line), correct_jsc_column(column)) {
                // The one shape whose output carries two name components:
                // the recovered function name plus the mapped one
                Some(pos) => ResolvedFrame::new(format!("{function} {}", format_mapped(&pos))),
                None => miss(frame),
            }
        }

        FrameKind::Unclassified => fallback(frame),
    }
}

/// Load both maps, parse the exception, and resolve the full stack.
///
/// A map that cannot be read or parsed rejects the whole operation;
/// per-frame anomalies do not. The joined resolved stack is logged at
/// info level.
///
/// # Errors
/// Returns [`StackError::InvalidInput`] for an unusable exception value
/// and [`StackError::MapLoadFailed`] when a map cannot be loaded.
pub fn resolve_stack<P: AsRef<Path>>(
    shim_map_path: P,
    bundle_map_path: P,
    stack: &RawStack,
) -> Result<Vec<ResolvedFrame>, StackError> {
    let shim_map = load_source_map(shim_map_path)?;
    let bundle_map = load_source_map(bundle_map_path)?;

    let frames = parse_frames(stack)?;
    let resolved = resolve_frames(&shim_map, &bundle_map, &frames);

    info!(
        "resolved stack:\n{}",
        resolved.iter().map(ResolvedFrame::as_str).collect::<Vec<_>>().join("\n")
    );
    Ok(resolved)
}

/// Query a map once both coordinates are known; absent coordinates are an
/// immediate miss.
fn lookup_at(
    map: &dyn PositionLookup,
    line: Option<u32>,
    column: Option<u32>,
) -> Option<OriginalPosition> {
    map.lookup(line?, column?)
}

/// `"<name> <source>:<line>:<column>"`; the mapped name may be empty.
fn format_mapped(pos: &OriginalPosition) -> String {
    format!("{} {}:{}:{}", pos.name.as_deref().unwrap_or(""), pos.source, pos.line, pos.column)
}

/// Lookup miss: log and fall back to the original frame text.
fn miss(frame: &RawFrame) -> ResolvedFrame {
    debug!("mapping not found for frame at {}", frame.file_name());
    fallback(frame)
}

/// Original frame text, always with the uncorrected numbers.
fn fallback(frame: &RawFrame) -> ResolvedFrame {
    let name = frame.function_name().unwrap_or("");
    let text = match (frame.line_number(), frame.column_number()) {
        (Some(line), Some(column)) => format!("{name} {}:{line}:{column}", frame.file_name()),
        (Some(line), None) => format!("{name} {}:{line}", frame.file_name()),
        _ => format!("{name} {}", frame.file_name()),
    };
    ResolvedFrame::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v8_line_correction() {
        assert_eq!(correct_v8_line(14), 10);
        assert_eq!(correct_v8_line(4), 0);
    }

    #[test]
    fn test_jsc_corrections() {
        assert_eq!(correct_jsc_line(12), 9);
        assert_eq!(correct_jsc_column(40), 39);
    }

    #[test]
    fn test_jsc_column_zero_clamps() {
        assert_eq!(correct_jsc_column(0), 0);
    }

    #[test]
    fn test_underflowing_lines_clamp() {
        assert_eq!(correct_v8_line(2), 0);
        assert_eq!(correct_jsc_line(1), 0);
    }

    #[test]
    fn test_format_mapped_without_name() {
        let pos = OriginalPosition {
            source: "app.js".to_string(),
            line: 10,
            column: 5,
            name: None,
        };
        assert_eq!(format_mapped(&pos), " app.js:10:5");
    }

    #[test]
    fn test_fallback_without_position() {
        let frame = RawFrame::new(Some("f".to_string()), "nativeCode", None, None);
        assert_eq!(fallback(&frame).as_str(), "f nativeCode");
    }

    #[test]
    fn test_fallback_with_position() {
        let frame = RawFrame::new(Some("f".to_string()), "weex", Some(4), Some(18640));
        assert_eq!(fallback(&frame).as_str(), "f weex:4:18640");
    }
}
