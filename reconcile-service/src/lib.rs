//! Reconciliation service for rdf-reconcile.
//!
//! This crate ties the query core to a pluggable execution engine:
//!
//! - [`ReconcileService`]: main entry point - composes a query via
//!   [`SparqlTextDialect`], hands it to the caller's
//!   [`QueryEngine`], and interprets the row sequence into result items
//! - [`ServiceConfig`]: per-service limits
//!
//! The service also owns the one step the query core deliberately leaves
//! to its caller: merging duplicate entities that matched through more
//! than one label property, and trimming to the requested limit. Rows are
//! consumed incrementally, so with a streaming engine the service stops
//! pulling as soon as enough unique entities have surfaced.
//!
//! # Example
//!
//! ```ignore
//! use reconcile_service::{ReconcileService, ServiceConfig};
//!
//! let service = ReconcileService::new(engine, search_properties, ServiceConfig::default())?;
//! let items = service.reconcile(&request)?;
//! ```

mod error;

pub use error::{Result, ServiceError};

use std::collections::HashSet;

use reconcile_model::{QueryEngine, ReconciliationRequest, ResultRow, SearchResultItem};
use reconcile_sparql::{
    entity_item, wrap_sample_rows, wrap_suggest_rows, DialectDescriptor, SparqlTextDialect,
};

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Maximum allowed limit per request.
    pub max_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_limit: reconcile_model::MAX_LIMIT,
        }
    }
}

/// Main reconciliation service.
///
/// Holds the execution engine, the query dialect, and the ordered set of
/// label properties to search. Stateless between calls; every operation
/// composes an independent query and interprets an independent row
/// sequence, so a service value can be shared across threads freely when
/// the engine allows it.
pub struct ReconcileService<E: QueryEngine> {
    /// Query execution collaborator.
    engine: E,
    /// Query composer.
    dialect: SparqlTextDialect,
    /// Ordered, deduplicated label property IRIs.
    search_properties: Vec<String>,
    /// Service configuration.
    config: ServiceConfig,
}

impl<E: QueryEngine> ReconcileService<E> {
    /// Create a new service searching over `search_properties`.
    ///
    /// Properties are deduplicated preserving first occurrence; order
    /// determines scored-label precedence in suggest results.
    ///
    /// # Errors
    ///
    /// [`ServiceError::NoSearchProperties`] if no property survives
    /// deduplication - the service could never compose a reconcile query.
    pub fn new(
        engine: E,
        search_properties: impl IntoIterator<Item = String>,
        config: ServiceConfig,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let search_properties: Vec<String> = search_properties
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        if search_properties.is_empty() {
            return Err(ServiceError::NoSearchProperties);
        }
        Ok(Self {
            engine,
            dialect: SparqlTextDialect::new(),
            search_properties,
            config,
        })
    }

    /// Create a new service with default configuration.
    pub fn with_defaults(
        engine: E,
        search_properties: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        Self::new(engine, search_properties, ServiceConfig::default())
    }

    /// The label properties this service searches, in precedence order.
    pub fn search_properties(&self) -> &[String] {
        &self.search_properties
    }

    /// Reconcile one request into at most `request.limit` unique candidates.
    ///
    /// The composed query overshoots (one batch of matches per label
    /// property); this method merges duplicates by entity IRI - first seen
    /// wins, preserving engine order - and stops consuming rows once the
    /// limit is reached.
    pub fn reconcile(&self, request: &ReconciliationRequest) -> Result<Vec<SearchResultItem>> {
        let clamped;
        let request = if request.limit > self.config.max_limit {
            tracing::warn!(
                requested = request.limit,
                max = self.config.max_limit,
                "limit clamped to max"
            );
            clamped = ReconciliationRequest {
                limit: self.config.max_limit,
                ..request.clone()
            };
            &clamped
        } else {
            request
        };

        let query = self
            .dialect
            .reconciliation_query(request, &self.search_properties)?;
        self.collect_unique_entities(&query, request.limit)
    }

    /// Suggest types matching a label prefix.
    pub fn suggest_types(&self, prefix: &str, limit: usize) -> Result<Vec<SearchResultItem>> {
        let query = self.dialect.type_suggest_query(prefix, self.clamp(limit));
        Ok(wrap_suggest_rows(self.collect_rows(&query)?, "type"))
    }

    /// Suggest properties matching a label prefix.
    pub fn suggest_properties(&self, prefix: &str, limit: usize) -> Result<Vec<SearchResultItem>> {
        let query = self
            .dialect
            .property_suggest_query(prefix, self.clamp(limit));
        Ok(wrap_suggest_rows(self.collect_rows(&query)?, "p"))
    }

    /// Suggest properties of instances of `subject_type` matching a label
    /// prefix.
    pub fn suggest_properties_of_type(
        &self,
        prefix: &str,
        subject_type: &str,
        limit: usize,
    ) -> Result<Vec<SearchResultItem>> {
        let query =
            self.dialect
                .property_suggest_query_for_type(prefix, subject_type, self.clamp(limit));
        Ok(wrap_suggest_rows(self.collect_rows(&query)?, "p"))
    }

    /// Free-text entity search over the configured label properties.
    pub fn search_entities(&self, prefix: &str, limit: usize) -> Result<Vec<SearchResultItem>> {
        let limit = self.clamp(limit);
        let query = self
            .dialect
            .entity_search_query(prefix, &self.search_properties, limit)?;
        self.collect_unique_entities(&query, limit)
    }

    /// Sample instances of a type, labelled via the first search property.
    pub fn sample_instances(&self, type_iri: &str, limit: usize) -> Result<Vec<SearchResultItem>> {
        let query =
            self.dialect
                .sample_instances_query(type_iri, &self.search_properties, self.clamp(limit))?;
        Ok(wrap_sample_rows(self.collect_rows(&query)?))
    }

    /// The machine-readable descriptor of the underlying query dialect.
    pub fn descriptor(&self) -> DialectDescriptor {
        self.dialect.descriptor()
    }

    fn clamp(&self, limit: usize) -> usize {
        if limit > self.config.max_limit {
            tracing::warn!(
                requested = limit,
                max = self.config.max_limit,
                "limit clamped to max"
            );
            self.config.max_limit
        } else {
            limit
        }
    }

    /// Execute `query` and buffer its rows, failing on the first engine
    /// error.
    fn collect_rows(&self, query: &str) -> Result<Vec<ResultRow>> {
        tracing::debug!(query, "executing query");
        let mut rows = Vec::new();
        for row in self.engine.execute(query)? {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Execute `query` and interpret rows incrementally, merging duplicate
    /// entities (first seen wins) until `limit` unique entities surface.
    fn collect_unique_entities(&self, query: &str, limit: usize) -> Result<Vec<SearchResultItem>> {
        tracing::debug!(query, limit, "executing entity query");
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for row in self.engine.execute(query)? {
            let row = row?;
            let Some(item) = entity_item(&row) else {
                continue;
            };
            if seen.insert(item.id.clone()) {
                items.push(item);
                if items.len() == limit {
                    break;
                }
            }
        }
        Ok(items)
    }
}

impl<E: QueryEngine> std::fmt::Debug for ReconcileService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconcileService")
            .field("dialect", &self.dialect)
            .field("search_properties", &self.search_properties)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
