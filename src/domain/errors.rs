//! Structured error types for restack
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("Invalid exception input: {0}")]
    InvalidInput(String),

    #[error("Failed to load source map {path}: {error}")]
    MapLoadFailed { path: String, error: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = StackError::InvalidInput("the exception stack is empty".to_string());
        assert_eq!(err.to_string(), "Invalid exception input: the exception stack is empty");
    }

    #[test]
    fn test_map_load_failed_display() {
        let err = StackError::MapLoadFailed {
            path: "/tmp/bundle.map".to_string(),
            error: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("/tmp/bundle.map"));
        assert!(err.to_string().contains("No such file"));
    }
}
