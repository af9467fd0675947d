//! Frame classification for the two Weex stack-trace grammars.
//!
//! A resolved stack mixes frames from two layers and two engines:
//!
//! 1. **Shim frames** - the fixed interpreter-bridge script ("jsfm") that
//!    always sits beneath the user's bundle. V8 reports it as the
//!    synthetic `(weex)` script, JSC as `native-bundle-main`.
//! 2. **V8 bundle frames** - the bundle is compiled through a generated
//!    function wrapper, so V8 attributes its frames to `<anonymous>`.
//! 3. **JSC bundle frames** - JSC smuggles the generated position into a
//!    synthesized function name (`foo[12:40]`) instead of the location.
//! 4. **Unclassified** - anything else (native frames, error messages).
//!
//! Classification is a single pure function producing a closed enum; the
//! resolver dispatches over it exhaustively, so every kind has a
//! compiler-checked correction and lookup behavior.

use crate::domain::RawFrame;
use regex::Regex;
use std::sync::LazyLock;

/// V8 shim marker in the frame's file name.
static V8_SHIM_FRAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"weex").unwrap());

/// JSC shim marker in the frame's file name.
static JSC_SHIM_FRAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"native-bundle-main").unwrap());

/// V8 anonymous-eval marker in the frame's file name.
static V8_BUNDLE_FRAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<anonymous>").unwrap());

/// Generated position embedded in a JSC synthesized function name.
static JSC_BUNDLE_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").unwrap());

/// Empty-bracket decoration left over once the position is stripped.
static EMPTY_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\]\s*").unwrap());

/// The frame shapes the resolver distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
    /// Shim-level frame from either engine; looked up in the shim map with
    /// no correction.
    Shim,
    /// V8 bundle frame; the line is corrected for the function-wrapper
    /// offset before the bundle-map lookup.
    V8Bundle,
    /// JSC bundle frame; the generated position lives in the function
    /// name, not in the location fields.
    JscBundle {
        /// Generated line embedded in the function name, uncorrected.
        line: u32,
        /// Generated column embedded in the function name, uncorrected.
        column: u32,
        /// Function name with the position and `[]` decoration stripped.
        function: String,
    },
    /// No known marker matched; resolved via fallback only, no lookup.
    Unclassified,
}

/// Classify a parsed frame. First matching rule wins.
#[must_use]
pub fn classify_frame(frame: &RawFrame) -> FrameKind {
    if V8_SHIM_FRAME.is_match(frame.file_name()) || JSC_SHIM_FRAME.is_match(frame.file_name()) {
        return FrameKind::Shim;
    }

    if V8_BUNDLE_FRAME.is_match(frame.file_name()) {
        return FrameKind::V8Bundle;
    }

    if let Some(function_name) = frame.function_name() {
        if let Some(caps) = JSC_BUNDLE_POSITION.captures(function_name) {
            // Captures are \d+, so parsing only fails on overflow
            if let (Ok(line), Ok(column)) = (caps[1].parse(), caps[2].parse()) {
                let stripped = JSC_BUNDLE_POSITION.replace(function_name, "");
                let function = EMPTY_BRACKETS.replace(&stripped, "").trim().to_string();
                return FrameKind::JscBundle { line, column, function };
            }
        }
    }

    FrameKind::Unclassified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(function: Option<&str>, file: &str, line: Option<u32>, column: Option<u32>) -> RawFrame {
        RawFrame::new(function.map(str::to_string), file, line, column)
    }

    #[test]
    fn test_v8_shim_frame() {
        let kind = classify_frame(&frame(Some("ws.consume"), "weex", Some(2), Some(23939)));
        assert_eq!(kind, FrameKind::Shim);
    }

    #[test]
    fn test_jsc_shim_frame() {
        let kind = classify_frame(&frame(None, "native-bundle-main.js", Some(4), Some(18648)));
        assert_eq!(kind, FrameKind::Shim);
    }

    #[test]
    fn test_v8_bundle_frame() {
        let kind = classify_frame(&frame(Some("eval"), "<anonymous>", Some(10), Some(226355)));
        assert_eq!(kind, FrameKind::V8Bundle);
    }

    #[test]
    fn test_jsc_bundle_frame_extracts_position() {
        let kind = classify_frame(&frame(Some("foo[12:40]"), "h", None, None));
        assert_eq!(
            kind,
            FrameKind::JscBundle { line: 12, column: 40, function: "foo".to_string() }
        );
    }

    #[test]
    fn test_jsc_bundle_position_embedded_in_text() {
        let kind = classify_frame(&frame(
            Some("[undefined:9:226355] ReferenceError: Can't find variable:"),
            "h",
            None,
            None,
        ));
        match kind {
            FrameKind::JscBundle { line, column, .. } => {
                assert_eq!(line, 9);
                assert_eq!(column, 226355);
            }
            other => panic!("expected JscBundle, got {other:?}"),
        }
    }

    #[test]
    fn test_shim_wins_over_bundle_markers() {
        // A file name carrying both markers classifies as shim
        let kind = classify_frame(&frame(Some("f[1:2]"), "weex/<anonymous>", Some(1), Some(1)));
        assert_eq!(kind, FrameKind::Shim);
    }

    #[test]
    fn test_position_in_file_name_does_not_classify_jsc() {
        // The JSC position marker only applies to the function name
        let kind = classify_frame(&frame(None, "app.js", Some(1), Some(2)));
        assert_eq!(kind, FrameKind::Unclassified);
    }

    #[test]
    fn test_unclassified_frame() {
        let kind = classify_frame(&frame(Some("f"), "nativeCode", None, None));
        assert_eq!(kind, FrameKind::Unclassified);
    }
}
