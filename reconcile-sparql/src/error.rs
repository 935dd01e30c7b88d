//! Error types for query composition.

use thiserror::Error;

/// Composition-time precondition violations.
///
/// These are rejected synchronously, before any query string exists -
/// a malformed or silently empty query must never reach the engine.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An operation that searches labels was given no label properties.
    #[error("cannot compose {operation} query: no search properties supplied")]
    NoSearchProperties {
        /// The operation that was requested.
        operation: &'static str,
    },
}

/// Result type alias for composition operations.
pub type Result<T> = std::result::Result<T, ComposeError>;
