//! The query composer.
//!
//! [`SparqlTextDialect`] selects the correct [`QueryShape`] for each
//! operation, enforces composition-time preconditions, and renders the
//! final query string. It is stateless and cheap to construct per call.

use serde::Serialize;

use reconcile_model::ReconciliationRequest;

use crate::error::{ComposeError, Result};
use crate::shape::QueryShape;

/// Name of this query dialect, reported in the descriptor.
pub const DIALECT_NAME: &str = "sparql-text";

/// Machine-readable self-description of the query dialect.
///
/// Callers persist or display this to record which dialect produced a
/// given configuration - a tagged-identity contract, not a protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialectDescriptor {
    /// The dialect identifier.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Composes Jena-text SPARQL queries for the reconciliation operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparqlTextDialect;

impl SparqlTextDialect {
    /// Create a new composer.
    pub fn new() -> Self {
        Self
    }

    /// Compose the reconciliation query for `request` over
    /// `search_properties`.
    ///
    /// With exactly one label property this routes to the single-property
    /// fast path, which searches and joins without the union-of-disjuncts
    /// form and orders results by descending search score (index-native
    /// ranking). With several properties, scores from different label
    /// vocabularies are not globally comparable, so the union shape carries
    /// no explicit order and label arbitration is deferred to the result
    /// interpreter.
    ///
    /// # Errors
    ///
    /// [`ComposeError::NoSearchProperties`] if `search_properties` is empty:
    /// there is no valid shape for that case.
    pub fn reconciliation_query(
        &self,
        request: &ReconciliationRequest,
        search_properties: &[String],
    ) -> Result<String> {
        let shape = match search_properties {
            [] => {
                return Err(ComposeError::NoSearchProperties {
                    operation: "reconciliation",
                })
            }
            [property] => QueryShape::ReconcileSingle {
                request,
                property: property.as_str(),
            },
            properties => QueryShape::ReconcileMulti {
                request,
                properties,
            },
        };
        let query = shape.render();
        tracing::debug!(
            properties = search_properties.len(),
            limit = request.limit,
            "composed reconciliation query"
        );
        Ok(query)
    }

    /// Compose the type-suggest query for a label prefix.
    pub fn type_suggest_query(&self, prefix: &str, limit: usize) -> String {
        QueryShape::TypeSuggest { prefix, limit }.render()
    }

    /// Compose the property-suggest query for a label prefix.
    pub fn property_suggest_query(&self, prefix: &str, limit: usize) -> String {
        QueryShape::PropertySuggest {
            prefix,
            subject_type: None,
            limit,
        }
        .render()
    }

    /// Compose the property-suggest query restricted to properties of
    /// instances of `subject_type`.
    pub fn property_suggest_query_for_type(
        &self,
        prefix: &str,
        subject_type: &str,
        limit: usize,
    ) -> String {
        QueryShape::PropertySuggest {
            prefix,
            subject_type: Some(subject_type),
            limit,
        }
        .render()
    }

    /// Compose the sample-instances query for a type.
    ///
    /// The first search property supplies the sampled label.
    ///
    /// # Errors
    ///
    /// [`ComposeError::NoSearchProperties`] if `search_properties` is empty.
    pub fn sample_instances_query(
        &self,
        type_iri: &str,
        search_properties: &[String],
        limit: usize,
    ) -> Result<String> {
        let label_property =
            search_properties
                .first()
                .ok_or(ComposeError::NoSearchProperties {
                    operation: "sample-instances",
                })?;
        Ok(QueryShape::SampleInstances {
            type_iri,
            label_property: label_property.as_str(),
            limit,
        }
        .render())
    }

    /// Compose the free-text entity-search query.
    ///
    /// # Errors
    ///
    /// [`ComposeError::NoSearchProperties`] if `search_properties` is empty.
    pub fn entity_search_query(
        &self,
        prefix: &str,
        search_properties: &[String],
        limit: usize,
    ) -> Result<String> {
        if search_properties.is_empty() {
            return Err(ComposeError::NoSearchProperties {
                operation: "entity-search",
            });
        }
        Ok(QueryShape::EntitySearch {
            prefix,
            properties: search_properties,
            limit,
        }
        .render())
    }

    /// The machine-readable descriptor for this dialect.
    pub fn descriptor(&self) -> DialectDescriptor {
        DialectDescriptor { kind: DIALECT_NAME }
    }
}
