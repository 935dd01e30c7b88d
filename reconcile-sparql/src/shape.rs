//! The fixed catalogue of query shapes.
//!
//! Every operation the reconciliation core supports corresponds to one
//! variant of [`QueryShape`], with one render function per variant. Shapes
//! are pure values over borrowed request data - no mutable state, cheap to
//! construct per call - and each is rendered exactly once, so every limit
//! position in the output comes from the same computed value by
//! construction.

use std::fmt::Write;

use reconcile_model::ReconciliationRequest;
use reconcile_vocab::prefixes;

use crate::escape::escape_query;
use crate::filter::{ContextFilter, LabelFilter, TypeFilter};

/// A renderable query shape.
///
/// The reconcile operation splits into two variants: with exactly one label
/// property the index can rank natively, so [`QueryShape::ReconcileSingle`]
/// orders by descending score; with several properties scores are not
/// comparable across vocabularies, so [`QueryShape::ReconcileMulti`] leaves
/// ordering to per-row label arbitration downstream.
#[derive(Debug, Clone, Copy)]
pub enum QueryShape<'a> {
    /// Match types by `rdfs:label`/`skos:prefLabel` with a fuzzy prefix.
    TypeSuggest {
        /// Raw (unescaped) prefix text.
        prefix: &'a str,
        /// Result and per-branch match limit.
        limit: usize,
    },

    /// Match properties by label, optionally scoped to subjects of a type.
    PropertySuggest {
        /// Raw (unescaped) prefix text.
        prefix: &'a str,
        /// Restrict to properties of instances of this type, if given.
        subject_type: Option<&'a str>,
        /// Result and per-branch match limit.
        limit: usize,
    },

    /// Reconcile against exactly one label property (index-ranked).
    ReconcileSingle {
        /// The reconciliation request.
        request: &'a ReconciliationRequest,
        /// The single label property IRI.
        property: &'a str,
    },

    /// Reconcile across several label properties (union of disjuncts).
    ReconcileMulti {
        /// The reconciliation request.
        request: &'a ReconciliationRequest,
        /// The label property IRIs to search.
        properties: &'a [String],
    },

    /// Deterministically sample instances of a type with one label each.
    SampleInstances {
        /// The type whose instances are sampled.
        type_iri: &'a str,
        /// The property supplying the sampled label.
        label_property: &'a str,
        /// Maximum number of instances.
        limit: usize,
    },

    /// Free-text entity search: label filter only, no type/context
    /// constraints.
    EntitySearch {
        /// Raw (unescaped) prefix text.
        prefix: &'a str,
        /// The label property IRIs to search.
        properties: &'a [String],
        /// Requested number of entities (per-property overshoot applied).
        limit: usize,
    },
}

/// Result limit sized for post-merge truncation.
///
/// Each of `property_count` label properties can independently contribute
/// up to `limit` matches for the same entity, so the query must overshoot;
/// the caller trims to `limit` unique entities after interpretation.
pub(crate) fn calculated_limit(property_count: usize, limit: usize) -> usize {
    property_count.max(1) * limit
}

impl QueryShape<'_> {
    /// Render this shape to a complete SPARQL query string.
    pub fn render(&self) -> String {
        match self {
            QueryShape::TypeSuggest { prefix, limit } => render_suggest(
                "type",
                "[] a ?type. ",
                prefix,
                *limit,
                &[prefixes::TEXT, prefixes::RDFS, prefixes::SKOS],
            ),
            QueryShape::PropertySuggest {
                prefix,
                subject_type: None,
                limit,
            } => render_suggest(
                "p",
                "[] ?p ?v. ",
                prefix,
                *limit,
                &[prefixes::TEXT, prefixes::RDFS, prefixes::SKOS],
            ),
            QueryShape::PropertySuggest {
                prefix,
                subject_type: Some(type_iri),
                limit,
            } => {
                let base = format!("[] a <{}>; ?p ?v. ", type_iri);
                render_suggest(
                    "p",
                    &base,
                    prefix,
                    *limit,
                    &[prefixes::TEXT, prefixes::RDFS, prefixes::SKOS],
                )
            }
            QueryShape::ReconcileSingle { request, property } => {
                render_reconcile_single(request, property)
            }
            QueryShape::ReconcileMulti {
                request,
                properties,
            } => render_reconcile_multi(request, properties),
            QueryShape::SampleInstances {
                type_iri,
                label_property,
                limit,
            } => render_sample_instances(type_iri, label_property, *limit),
            QueryShape::EntitySearch {
                prefix,
                properties,
                limit,
            } => render_entity_search(prefix, properties, *limit),
        }
    }
}

/// Shared skeleton for the type/property suggest shapes.
///
/// Projects `?<id_var> ?label1 ?score1 ?label2 ?score2`, searching
/// `rdfs:label` into the first scored pair and `skos:prefLabel` into the
/// second via OR-style optional matching. The disjunctive presence filter
/// guarantees every row binds at least one pair.
fn render_suggest(
    id_var: &str,
    base_pattern: &str,
    prefix_text: &str,
    limit: usize,
    prefix_decls: &[&str],
) -> String {
    let escaped = escape_query(prefix_text);
    let mut q = String::new();
    for decl in prefix_decls {
        q.push_str(decl);
    }
    write!(
        q,
        "SELECT DISTINCT ?{id} ?label1 ?score1 ?label2 ?score2 WHERE {{{base}\
         OPTIONAL {{(?{id} ?score1) text:query (rdfs:label '{query}*' {limit}) . \
         ?{id} rdfs:label ?label1 . }} \
         OPTIONAL {{(?{id} ?score2) text:query (skos:prefLabel '{query}*' {limit}) . \
         ?{id} skos:prefLabel ?label2 . }} \
         FILTER (bound(?label1) || bound(?label2))}} LIMIT {limit}",
        id = id_var,
        base = base_pattern,
        query = escaped,
        limit = limit,
    )
    .expect("writing to String cannot fail");
    q
}

fn render_reconcile_single(request: &ReconciliationRequest, property: &str) -> String {
    let escaped = escape_query(&request.query);
    let limit = calculated_limit(1, request.limit);
    let mut q = String::new();
    q.push_str(prefixes::TEXT);
    q.push_str(prefixes::RDF);
    write!(
        q,
        "SELECT ?entity ?label WHERE {{ \
         (?entity ?score1) text:query (<{property}> '{query}' {limit}) . \
         ?entity <{property}> ?label . \
         {type_filter}{context_filter}\
         FILTER (isIRI(?entity))}} GROUP BY ?entity ?label \
         ORDER BY DESC(?score1) LIMIT {limit}",
        property = property,
        query = escaped,
        limit = limit,
        type_filter = TypeFilter(&request.types),
        context_filter = ContextFilter(&request.context.properties),
    )
    .expect("writing to String cannot fail");
    q
}

fn render_reconcile_multi(request: &ReconciliationRequest, properties: &[String]) -> String {
    let escaped = escape_query(&request.query);
    let limit = calculated_limit(properties.len(), request.limit);
    let mut q = String::new();
    q.push_str(prefixes::TEXT);
    q.push_str(prefixes::RDF);
    write!(
        q,
        "SELECT ?entity ?label WHERE {{\
         {label_filter}{type_filter}{context_filter} \
         FILTER (isIRI(?entity))}} GROUP BY ?entity ?label LIMIT {limit}",
        label_filter = LabelFilter {
            properties,
            escaped_query: &escaped,
            branch_limit: limit,
        },
        type_filter = TypeFilter(&request.types),
        context_filter = ContextFilter(&request.context.properties),
        limit = limit,
    )
    .expect("writing to String cannot fail");
    q
}

fn render_sample_instances(type_iri: &str, label_property: &str, limit: usize) -> String {
    format!(
        "SELECT ?entity (SAMPLE(?label) AS ?label1) WHERE {{\
         ?entity a <{type_iri}>. ?entity <{label_property}> ?label. \
         }} GROUP BY ?entity LIMIT {limit}",
        type_iri = type_iri,
        label_property = label_property,
        limit = limit,
    )
}

fn render_entity_search(prefix: &str, properties: &[String], limit: usize) -> String {
    let escaped = escape_query(prefix);
    let limit = properties.len() * limit;
    let mut q = String::new();
    q.push_str(prefixes::TEXT);
    write!(
        q,
        "SELECT ?entity ?label WHERE {{{label_filter}}} LIMIT {limit}",
        label_filter = LabelFilter {
            properties,
            escaped_query: &escaped,
            branch_limit: limit,
        },
        limit = limit,
    )
    .expect("writing to String cannot fail");
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_property() -> String {
        "http://www.w3.org/2000/01/rdf-schema#label".to_string()
    }

    #[test]
    fn test_calculated_limit_overshoots_per_property() {
        assert_eq!(calculated_limit(1, 5), 5);
        assert_eq!(calculated_limit(3, 5), 15);
        // Guarded against a degenerate zero count.
        assert_eq!(calculated_limit(0, 5), 5);
    }

    #[test]
    fn test_single_reconcile_orders_by_score() {
        let request = ReconciliationRequest::new("lond", 5);
        let property = label_property();
        let q = QueryShape::ReconcileSingle {
            request: &request,
            property: &property,
        }
        .render();

        assert!(q.contains("ORDER BY DESC(?score1)"));
        assert!(q.contains("'lond' 5"));
        assert!(q.ends_with("LIMIT 5"));
        // No union path on the fast path.
        assert!(!q.contains("UNION"));
    }

    #[test]
    fn test_multi_reconcile_has_no_global_order() {
        let request = ReconciliationRequest::new("lond", 5);
        let properties = vec![
            label_property(),
            "http://www.w3.org/2004/02/skos/core#prefLabel".to_string(),
        ];
        let q = QueryShape::ReconcileMulti {
            request: &request,
            properties: &properties,
        }
        .render();

        assert!(!q.contains("ORDER BY"));
        assert!(q.contains("UNION"));
        // Calculated limit 2 * 5 at the branch and outer positions.
        assert!(q.contains("'lond*' 10"));
        assert!(q.ends_with("LIMIT 10"));
        assert!(q.contains("FILTER (isIRI(?entity))"));
    }

    #[test]
    fn test_reconcile_applies_type_and_context_filters() {
        use reconcile_model::ContextValue;

        let request = ReconciliationRequest::new("lond", 5)
            .with_type("http://example.org/City")
            .with_context_property(
                "http://example.org/country",
                ContextValue::iri("http://example.org/UK"),
            );
        let property = label_property();
        let q = QueryShape::ReconcileSingle {
            request: &request,
            property: &property,
        }
        .render();

        assert!(q.contains("{?entity rdf:type <http://example.org/City>. }"));
        assert!(q.contains("?entity <http://example.org/country> <http://example.org/UK>. "));
    }

    #[test]
    fn test_type_suggest_shape() {
        let q = QueryShape::TypeSuggest {
            prefix: "cit",
            limit: 7,
        }
        .render();

        assert!(q.starts_with("PREFIX text:"));
        assert!(q.contains("SELECT DISTINCT ?type ?label1 ?score1 ?label2 ?score2"));
        assert!(q.contains("[] a ?type. "));
        assert!(q.contains("text:query (rdfs:label 'cit*' 7)"));
        assert!(q.contains("text:query (skos:prefLabel 'cit*' 7)"));
        assert!(q.contains("FILTER (bound(?label1) || bound(?label2))"));
        assert!(q.ends_with("LIMIT 7"));
    }

    #[test]
    fn test_property_suggest_scoped_to_type() {
        let q = QueryShape::PropertySuggest {
            prefix: "pop",
            subject_type: Some("http://example.org/City"),
            limit: 3,
        }
        .render();

        assert!(q.contains("[] a <http://example.org/City>; ?p ?v. "));
        assert!(q.contains("SELECT DISTINCT ?p ?label1 ?score1 ?label2 ?score2"));
    }

    #[test]
    fn test_property_suggest_unscoped() {
        let q = QueryShape::PropertySuggest {
            prefix: "pop",
            subject_type: None,
            limit: 3,
        }
        .render();

        assert!(q.contains("[] ?p ?v. "));
        assert!(!q.contains("a <"));
    }

    #[test]
    fn test_property_suggest_escapes_prefix_text() {
        let q = QueryShape::PropertySuggest {
            prefix: "a+b",
            subject_type: None,
            limit: 3,
        }
        .render();
        assert!(q.contains("'a\\\\+b*'"));
    }

    #[test]
    fn test_sample_instances_shape() {
        let property = label_property();
        let q = QueryShape::SampleInstances {
            type_iri: "http://example.org/City",
            label_property: &property,
            limit: 4,
        }
        .render();

        assert_eq!(
            q,
            "SELECT ?entity (SAMPLE(?label) AS ?label1) WHERE {\
             ?entity a <http://example.org/City>. \
             ?entity <http://www.w3.org/2000/01/rdf-schema#label> ?label. \
             } GROUP BY ?entity LIMIT 4"
        );
    }

    #[test]
    fn test_entity_search_shape() {
        let properties = vec![label_property(), label_property().replace("label", "title")];
        let q = QueryShape::EntitySearch {
            prefix: "lond",
            properties: &properties,
            limit: 5,
        }
        .render();

        assert!(q.contains("UNION"));
        assert!(q.ends_with("LIMIT 10"));
        assert!(!q.contains("rdf:type"));
        assert!(!q.contains("isIRI"));
    }

    #[test]
    fn test_escaped_quote_cannot_break_out_of_search_phrase() {
        let request = ReconciliationRequest::new("l'ond", 5);
        let property = label_property();
        let q = QueryShape::ReconcileSingle {
            request: &request,
            property: &property,
        }
        .render();
        assert!(q.contains("'l\\'ond'"));
    }
}
