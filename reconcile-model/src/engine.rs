//! The query-execution collaborator contract.

use thiserror::Error;

use crate::ResultRow;

/// Opaque failure from the query-execution collaborator.
///
/// The reconciliation core does not interpret or suppress engine failures;
/// they pass through to the caller unchanged.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct EngineError(Box<dyn std::error::Error + Send + Sync>);

impl EngineError {
    /// Wrap an underlying engine failure.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    /// Create an engine error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self(message.into().into())
    }
}

/// Executes a composed query against the backing store.
///
/// Implementations run the query string (in their native query language)
/// and yield a forward-only sequence of rows, so interpretation can proceed
/// incrementally when the engine supports streaming. The call is
/// synchronous; timeout and cancellation policy belong to the
/// implementation, not to the reconciliation core.
pub trait QueryEngine {
    /// The row sequence produced by one execution.
    type Rows: Iterator<Item = Result<ResultRow, EngineError>>;

    /// Execute `query` and return its row sequence.
    fn execute(&self, query: &str) -> Result<Self::Rows, EngineError>;
}
