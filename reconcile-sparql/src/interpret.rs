//! Result interpretation.
//!
//! Suggest-style rows carry up to two parallel scored labels, one per label
//! vocabulary searched (`label1`/`score1` for `rdfs:label`,
//! `label2`/`score2` for `skos:prefLabel`). The query's disjunctive
//! presence filter guarantees at least one pair per row; interpretation is
//! defensive about the guarantee anyway and degrades to an empty label
//! instead of failing.
//!
//! None of the wrappers deduplicate: two rows for the same entity arriving
//! via two different label properties stay two items, in engine order.
//! Deduplication and limit trimming are the caller's step (the service
//! layer applies them after interpretation).

use std::sync::Arc;

use reconcile_model::{ResultRow, SearchResultItem};

/// The ordered scored-label pairs a row may carry, by field name.
///
/// Ordered: earlier pairs win score ties. Extending to more label
/// vocabularies means appending here and projecting the extra pair in the
/// suggest shapes.
const SCORED_LABEL_FIELDS: &[(&str, &str)] = &[("label1", "score1"), ("label2", "score2")];

/// Resolve which of a row's competing scored labels is authoritative.
///
/// A pair counts only when both its label and score are bound. The label
/// with the strictly greater score wins; on an exact tie the earlier pair
/// survives, which keeps the outcome deterministic. A row with no complete
/// pair yields an empty label.
pub fn preferred_label(row: &ResultRow) -> Arc<str> {
    let mut best: Option<(&Arc<str>, f64)> = None;
    for &(label_field, score_field) in SCORED_LABEL_FIELDS {
        let (Some(label), Some(score)) = (row.text(label_field), row.number(score_field)) else {
            continue;
        };
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((label, score)),
        }
    }
    match best {
        Some((label, _)) => label.clone(),
        None => {
            tracing::warn!("result row carries no scored label pair");
            Arc::from("")
        }
    }
}

/// Interpret one suggest row: `id_field` IRI plus the preferred label.
///
/// Returns `None` (with a warning) when the id field is absent - the query
/// projects it unconditionally, so absence is an upstream defect, not a
/// reason to abort the sequence.
pub fn suggest_item(row: &ResultRow, id_field: &str) -> Option<SearchResultItem> {
    let Some(id) = row.iri(id_field) else {
        tracing::warn!(field = id_field, "suggest row is missing its id field");
        return None;
    };
    Some(SearchResultItem::new(
        id.as_ref(),
        preferred_label(row).as_ref(),
    ))
}

/// Interpret one reconcile/entity-search row: `entity` IRI plus `label`.
pub fn entity_item(row: &ResultRow) -> Option<SearchResultItem> {
    let Some(entity) = row.iri("entity") else {
        tracing::warn!("result row is missing its entity field");
        return None;
    };
    let label = row.text("label").map(|label| label.as_ref()).unwrap_or("");
    Some(SearchResultItem::new(entity.as_ref(), label))
}

/// Interpret one sample-instances row: `entity` IRI plus the sampled
/// `label1`.
pub fn sample_item(row: &ResultRow) -> Option<SearchResultItem> {
    let Some(entity) = row.iri("entity") else {
        tracing::warn!("sample row is missing its entity field");
        return None;
    };
    let label = row.text("label1").map(|label| label.as_ref()).unwrap_or("");
    Some(SearchResultItem::new(entity.as_ref(), label))
}

/// Interpret a suggest result set, preserving engine order.
pub fn wrap_suggest_rows(
    rows: impl IntoIterator<Item = ResultRow>,
    id_field: &str,
) -> Vec<SearchResultItem> {
    rows.into_iter()
        .filter_map(|row| suggest_item(&row, id_field))
        .collect()
}

/// Interpret a reconcile/entity-search result set, preserving engine order.
pub fn wrap_entity_rows(rows: impl IntoIterator<Item = ResultRow>) -> Vec<SearchResultItem> {
    rows.into_iter().filter_map(|row| entity_item(&row)).collect()
}

/// Interpret a sample-instances result set, preserving engine order.
pub fn wrap_sample_rows(rows: impl IntoIterator<Item = ResultRow>) -> Vec<SearchResultItem> {
    rows.into_iter().filter_map(|row| sample_item(&row)).collect()
}
