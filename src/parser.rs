//! Frame parsing for raw Weex stack traces
//!
//! Splits a raw exception stack into per-frame strings, strips the
//! engine-specific decoration added by V8 and JavaScriptCore, and extracts
//! a tentative (function name, location) pair per frame.
//!
//! The two engines genuinely differ in token order and decoration, so the
//! grammars are kept separate instead of being forced through a shared
//! pattern. Parsing never consults a source map; classification and
//! position correction happen later in [`crate::resolver`].

use crate::domain::{RawFrame, StackError};
use regex::Regex;
use std::sync::LazyLock;

/// Frames that passed through the V8 shim carry the synthetic `(weex)`
/// script name.
static V8_SHIM_DECORATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(weex\)").unwrap());

/// JavaScriptCore frames carry a bare `identifier@` prefix.
static JSC_DECORATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+@").unwrap());

/// Run-on `eval at <name> ((weex):L:C), ` clause that V8 embeds in bundle
/// frames. It must be removed whole or its position would be parsed as
/// part of the frame location.
static V8_EVAL_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"eval at \w* \(\(weex\)[:\d+]+\),\s").unwrap());

/// Location token: a leading name/path component, then an optional `:line`
/// and an optional `:column`, anchored at the end of the token.
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)(?::(\d+))?(?::(\d+))?$").unwrap());

/// A raw exception stack, before any parsing.
#[derive(Debug, Clone)]
pub enum RawStack {
    /// A single string with one frame per line. Lines are delimited by real
    /// newlines or, if the transport escaped them, by literal `\n` text.
    Text(String),
    /// Pre-split per-frame strings.
    Frames(Vec<String>),
}

impl RawStack {
    /// Interpret a JSON value as a raw stack.
    ///
    /// Accepts a string or an array of strings. Anything else (null,
    /// numbers, mixed arrays) is an unsupported exception shape.
    ///
    /// # Errors
    /// Returns [`StackError::InvalidInput`] for unsupported shapes.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, StackError> {
        match value {
            serde_json::Value::String(text) => Ok(RawStack::Text(text.clone())),
            serde_json::Value::Array(items) => {
                let mut frames = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::String(frame) => frames.push(frame.clone()),
                        other => {
                            return Err(StackError::InvalidInput(format!(
                                "stack array may only contain strings, got {other}"
                            )))
                        }
                    }
                }
                Ok(RawStack::Frames(frames))
            }
            other => Err(StackError::InvalidInput(format!(
                "stack must be a string or an array of strings, got {other}"
            ))),
        }
    }
}

impl From<&str> for RawStack {
    fn from(text: &str) -> Self {
        RawStack::Text(text.to_string())
    }
}

impl From<String> for RawStack {
    fn from(text: String) -> Self {
        RawStack::Text(text)
    }
}

impl From<Vec<String>> for RawStack {
    fn from(frames: Vec<String>) -> Self {
        RawStack::Frames(frames)
    }
}

/// Parse a raw exception stack into structured frames.
///
/// One [`RawFrame`] is produced per stack line, in order. Malformed
/// individual frames never fail the batch; their unparsed fields are
/// simply absent.
///
/// # Errors
/// Returns [`StackError::InvalidInput`] when the stack text is empty.
pub fn parse_frames(stack: &RawStack) -> Result<Vec<RawFrame>, StackError> {
    match stack {
        RawStack::Text(text) => {
            if text.is_empty() {
                return Err(StackError::InvalidInput(
                    "the exception stack is empty".to_string(),
                ));
            }
            let mut lines: Vec<&str> = text.split('\n').collect();
            if lines.len() == 1 {
                // Some transports escape the newlines as literal `\n` text.
                lines = text.split("\\n").collect();
            }
            Ok(lines.iter().map(|line| parse_frame(line)).collect())
        }
        RawStack::Frames(frames) => Ok(frames.iter().map(|line| parse_frame(line)).collect()),
    }
}

/// Parse one stack-trace line into a frame.
///
/// After decoration stripping, the last whitespace-separated token is the
/// location; everything before it is the tentative function name.
fn parse_frame(line: &str) -> RawFrame {
    let stripped = strip_decoration(line);
    let mut tokens: Vec<&str> = stripped.split_whitespace().collect();
    let location = tokens.pop().unwrap_or("");
    let function_name = if tokens.is_empty() { None } else { Some(tokens.join(" ")) };
    let (file_name, line_number, column_number) = parse_location(location);
    RawFrame::new(function_name, file_name, line_number, column_number)
}

/// Remove engine-specific decoration from a raw frame line.
///
/// V8-shim lines lose their leading `at ` token and any embedded
/// `eval at` clause; JSC lines lose their `identifier@` prefix; anything
/// else passes through unmodified.
fn strip_decoration(line: &str) -> String {
    if V8_SHIM_DECORATION.is_match(line) {
        let mut line = line.replacen("at ", "", 1);
        if line.contains("(eval at") {
            line = V8_EVAL_CLAUSE.replace(&line, "").into_owned();
        }
        line
    } else if JSC_DECORATION.is_match(line) {
        JSC_DECORATION.replace(line, "").into_owned()
    } else {
        line.to_string()
    }
}

/// Split a location token into (file name, line, column).
///
/// A token with no colon is a bare identifier (`native`). Otherwise
/// parentheses are stripped and the longest valid numeric suffix wins;
/// anything that fails to match stays in the file name. Malformed tokens
/// never raise, absent fields are the failure mode.
fn parse_location(token: &str) -> (String, Option<u32>, Option<u32>) {
    if !token.contains(':') {
        return (token.to_string(), None, None);
    }

    let cleaned: String = token.chars().filter(|c| *c != '(' && *c != ')').collect();
    match LOCATION.captures(&cleaned) {
        Some(caps) => {
            let file = caps.get(1).map_or_else(String::new, |m| m.as_str().to_string());
            let line = caps.get(2).and_then(|m| m.as_str().parse().ok());
            let column = caps.get(3).and_then(|m| m.as_str().parse().ok());
            (file, line, column)
        }
        None => (cleaned, None, None),
    }
}
