//! End-to-end compose-then-interpret flow over canned rows.

use reconcile_model::{ContextValue, ReconciliationRequest, ResultRow, SearchResultItem};
use reconcile_sparql::{wrap_entity_rows, wrap_suggest_rows, SparqlTextDialect};

fn search_properties() -> Vec<String> {
    vec![
        "http://www.w3.org/2000/01/rdf-schema#label".to_string(),
        "http://www.w3.org/2004/02/skos/core#prefLabel".to_string(),
    ]
}

#[test]
fn multi_property_reconcile_roundtrip() {
    let dialect = SparqlTextDialect::new();
    let request = ReconciliationRequest::new("lond", 2)
        .with_type("http://example.org/City")
        .with_context_property(
            "http://example.org/country",
            ContextValue::iri("http://example.org/UK"),
        );

    let query = dialect
        .reconciliation_query(&request, &search_properties())
        .unwrap();

    // Both label properties are searched as one logical OR, each with the
    // overshoot limit 2 * 2, and the filters ride along.
    assert!(query.contains("UNION"));
    assert!(query.contains("'lond*' 4"));
    assert!(query.ends_with("LIMIT 4"));
    assert!(query.contains("rdf:type <http://example.org/City>"));
    assert!(query.contains("<http://example.org/country> <http://example.org/UK>"));

    // The engine would return one (entity, label) pair per match; the same
    // entity may arrive once per matching label property.
    let rows = vec![
        ResultRow::new()
            .with_iri("entity", "http://example.org/london")
            .with_text("label", "London"),
        ResultRow::new()
            .with_iri("entity", "http://example.org/london")
            .with_text("label", "Greater London"),
        ResultRow::new()
            .with_iri("entity", "http://example.org/londonderry")
            .with_text("label", "Londonderry"),
    ];
    let items = wrap_entity_rows(rows);

    // Interpretation keeps duplicates and order; merging is the caller's.
    assert_eq!(
        items,
        vec![
            SearchResultItem::new("http://example.org/london", "London"),
            SearchResultItem::new("http://example.org/london", "Greater London"),
            SearchResultItem::new("http://example.org/londonderry", "Londonderry"),
        ]
    );
}

#[test]
fn sample_scenario_single_property_unfiltered() {
    // Request {query: "lond", types: [], limit: 5, context: []} over a
    // single label property: fast path, limit 5, no filter text at all.
    let dialect = SparqlTextDialect::new();
    let request = ReconciliationRequest::new("lond", 5);
    let properties = vec!["http://www.w3.org/2000/01/rdf-schema#label".to_string()];

    let query = dialect.reconciliation_query(&request, &properties).unwrap();

    assert!(query.contains("ORDER BY DESC(?score1)"));
    assert!(query.ends_with("LIMIT 5"));
    assert!(!query.contains("UNION"));
    assert!(!query.contains("rdf:type <"));
    assert!(!query.contains("http://example.org"));
}

#[test]
fn type_suggest_roundtrip_arbitrates_labels() {
    let dialect = SparqlTextDialect::new();
    let query = dialect.type_suggest_query("cit", 10);
    assert!(query.contains("?type ?label1 ?score1 ?label2 ?score2"));

    let rows = vec![
        ResultRow::new()
            .with_iri("type", "http://example.org/City")
            .with_text("label1", "City")
            .with_number("score1", 0.9)
            .with_text("label2", "Municipality")
            .with_number("score2", 0.3),
        ResultRow::new()
            .with_iri("type", "http://example.org/Citadel")
            .with_text("label2", "Citadel")
            .with_number("score2", 0.5),
    ];
    let items = wrap_suggest_rows(rows, "type");

    assert_eq!(
        items,
        vec![
            SearchResultItem::new("http://example.org/City", "City"),
            SearchResultItem::new("http://example.org/Citadel", "Citadel"),
        ]
    );
}
