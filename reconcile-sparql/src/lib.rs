//! # SPARQL query core for rdf-reconcile
//!
//! This crate turns reconciliation requests into full-text-search-augmented
//! SPARQL queries (Jena-text dialect) and interprets the heterogeneous rows
//! that come back into ranked candidate lists.
//!
//! ## Architecture
//!
//! The core operates in three phases:
//!
//! 1. **Compose**: request fragments (label search, type filter, context
//!    filter) become typed [`filter`] values, a [`shape::QueryShape`] variant
//!    is selected, and the whole query is rendered exactly once - there is
//!    no textual placeholder re-substitution.
//! 2. **Execute**: the composed string is handed to the caller's
//!    [`QueryEngine`](reconcile_model::QueryEngine) (out of scope here).
//! 3. **Interpret**: the [`interpret`] module walks the returned rows,
//!    arbitrates between competing scored labels, and produces one
//!    [`SearchResultItem`](reconcile_model::SearchResultItem) per row.
//!
//! ## Quick Start
//!
//! ```
//! use reconcile_model::ReconciliationRequest;
//! use reconcile_sparql::SparqlTextDialect;
//!
//! let dialect = SparqlTextDialect::new();
//! let request = ReconciliationRequest::new("lond", 5);
//! let properties = vec!["http://www.w3.org/2000/01/rdf-schema#label".to_string()];
//!
//! let sparql = dialect.reconciliation_query(&request, &properties).unwrap();
//! assert!(sparql.contains("ORDER BY DESC(?score1)"));
//! ```

pub mod compose;
pub mod error;
pub mod escape;
pub mod filter;
pub mod interpret;
pub mod shape;

pub use compose::{DialectDescriptor, SparqlTextDialect, DIALECT_NAME};
pub use error::{ComposeError, Result};
pub use escape::escape_query;
pub use interpret::{
    entity_item, preferred_label, sample_item, suggest_item, wrap_entity_rows, wrap_sample_rows,
    wrap_suggest_rows,
};
pub use shape::QueryShape;
