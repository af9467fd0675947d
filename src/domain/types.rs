//! Frame types shared by the parser and the resolver
//!
//! `RawFrame` is constructed once per stack line by the parser and never
//! mutated afterwards; the resolver only reads it. `ResolvedFrame` is the
//! final display-ready output.

use serde::Serialize;
use std::fmt;

/// A single parsed stack frame, before source-map resolution.
///
/// The location fields are tentative: the file name may still be a bare
/// identifier (`native`), and line/column are absent whenever the raw
/// location token did not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    function_name: Option<String>,
    file_name: String,
    line_number: Option<u32>,
    column_number: Option<u32>,
}

impl RawFrame {
    /// Create a frame.
    ///
    /// A column is never recorded without a line; if `line_number` is
    /// absent the column is dropped.
    #[must_use]
    pub fn new(
        function_name: Option<String>,
        file_name: impl Into<String>,
        line_number: Option<u32>,
        column_number: Option<u32>,
    ) -> Self {
        let column_number = if line_number.is_some() { column_number } else { None };
        Self { function_name, file_name: file_name.into(), line_number, column_number }
    }

    /// Symbol name, if one was recoverable from the frame text.
    #[must_use]
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    /// Raw location token (may be a script marker like `weex` or a bare
    /// identifier like `native`).
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Generated line number, 1-based, if present.
    #[must_use]
    pub fn line_number(&self) -> Option<u32> {
        self.line_number
    }

    /// Generated column number, if present. Never `Some` when
    /// [`line_number`](Self::line_number) is `None`.
    #[must_use]
    pub fn column_number(&self) -> Option<u32> {
        self.column_number
    }
}

/// A display-ready resolved frame line.
///
/// Either `"<name> <source>:<line>:<column>"` when a mapping was found, or
/// the original uncorrected frame text when it was not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFrame(String);

impl ResolvedFrame {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// The resolved frame text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
