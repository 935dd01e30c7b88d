//! Service-level error types.

use thiserror::Error;

use reconcile_model::EngineError;
use reconcile_sparql::ComposeError;

/// Errors surfaced by the reconciliation service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service was constructed without any label properties to search.
    #[error("no search properties configured")]
    NoSearchProperties,

    /// A query could not be composed (precondition violation).
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The query engine failed; passed through uninterpreted.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
