//! # restack - Weex Stack-Trace Resolution
//!
//! Resolves minified/compiled JavaScript exception stack traces from the
//! Weex mobile runtime back to original source positions. Weex executes
//! the user's bundle wrapped in a synthetic function beneath a small fixed
//! runtime shim ("jsfm"), so raw stack traces point into generated code
//! shifted by engine-specific offsets.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │        Raw exception (string or per-frame list)          │
//! └──────────────────────────┬───────────────────────────────┘
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Frame Parser (parser)                                   │
//! │  • split lines (real or escaped newlines)                │
//! │  • strip V8/JSC decoration                               │
//! │  • extract (function name, file, line, column)           │
//! └──────────────────────────┬───────────────────────────────┘
//!                            ▼ Vec<RawFrame>
//! ┌──────────────────────────────────────────────────────────┐
//! │  Frame Resolver (resolver)                               │
//! │  • classify: Shim / V8Bundle / JscBundle / Unclassified  │
//! │  • correct: V8 line −4, JSC line −3 column −1            │
//! │  • look up in shim map or bundle map                     │
//! │  • format, falling back to the uncorrected frame         │
//! └──────────────────────────┬───────────────────────────────┘
//!                            ▼
//!               Vec<ResolvedFrame> (display text)
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: raw stack text → structured [`domain::RawFrame`]s
//! - [`classification`]: pure frame-shape classifier ([`classification::FrameKind`])
//! - [`resolver`]: corrections, map lookups, formatting, and the outer
//!   [`resolver::resolve_stack`] entry point
//! - [`mapping`]: the [`mapping::PositionLookup`] seam and the source-map
//!   file loader
//! - [`domain`]: core frame types and structured errors
//! - [`cli`]: command-line argument parsing
//!
//! ## Typical Usage
//!
//! ```bash
//! # Resolve a crash log against the shim and bundle maps
//! restack --shim-map jsfm.js.map --bundle-map app.js.map crash.txt
//!
//! # Or pipe the stack in
//! cat crash.txt | restack --shim-map jsfm.js.map --bundle-map app.js.map
//! ```

pub mod classification;
pub mod cli;
pub mod domain;
pub mod mapping;
pub mod parser;
pub mod resolver;
