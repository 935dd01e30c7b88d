//! Reconciliation model types for rdf-reconcile.
//!
//! This crate defines the contract between the reconciliation service layer
//! and the SPARQL query core:
//!
//! - [`ReconciliationRequest`]: one incoming reconciliation call (query text,
//!   candidate types, limit, contextual property constraints)
//! - [`ResultRow`]: one row returned by query execution, exposing named,
//!   optionally-absent fields
//! - [`SearchResultItem`]: one ranked candidate in the outbound result
//! - [`QueryEngine`]: the execution collaborator that runs a composed SPARQL
//!   query and yields a forward-only row sequence
//!
//! The types here are deliberately engine-agnostic: the query core composes
//! query strings against these types and interprets rows through them, while
//! transport, persistence, and relevance scoring stay behind the
//! [`QueryEngine`] boundary.

mod engine;
mod item;
mod request;
mod row;

pub use engine::{EngineError, QueryEngine};
pub use item::SearchResultItem;
pub use request::{ContextValue, PropertyContext, ReconciliationContext, ReconciliationRequest};
pub use row::{ResultRow, RowValue};

/// Default result limit for reconciliation requests if not specified.
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum result limit a service should allow per request.
pub const MAX_LIMIT: usize = 1000;
