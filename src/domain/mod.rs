//! Domain model for restack
//!
//! This module contains the core frame types and errors that provide:
//! - Immutable parsed-frame values with enforced invariants
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use errors::StackError;
pub use types::{RawFrame, ResolvedFrame};
