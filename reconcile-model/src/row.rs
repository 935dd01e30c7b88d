//! Result row type for query execution.

use std::collections::HashMap;
use std::sync::Arc;

/// A bound value in a result row - cheap to clone (Arc-backed strings).
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    /// IRI/node reference (entity, type, or property identifiers).
    Iri(Arc<str>),
    /// String literal (labels).
    Text(Arc<str>),
    /// Numeric literal (relevance scores).
    Number(f64),
}

/// One row from query execution, exposing named, optionally-absent fields.
///
/// A field is absent when the row did not match through the clause that
/// binds it - e.g. a suggest row matched via `skos:prefLabel` only carries
/// `label2`/`score2` and leaves `label1`/`score1` unbound.
///
/// Rows are produced by [`QueryEngine`](crate::QueryEngine) implementations
/// and consumed by the result interpreter; the builder-style `with_*`
/// constructors keep both sides (and tests) free of map plumbing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    bindings: HashMap<Arc<str>, RowValue>,
}

impl ResultRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an IRI-valued field.
    pub fn with_iri(mut self, name: impl AsRef<str>, iri: impl AsRef<str>) -> Self {
        self.bindings
            .insert(Arc::from(name.as_ref()), RowValue::Iri(Arc::from(iri.as_ref())));
        self
    }

    /// Bind a text-valued field.
    pub fn with_text(mut self, name: impl AsRef<str>, text: impl AsRef<str>) -> Self {
        self.bindings.insert(
            Arc::from(name.as_ref()),
            RowValue::Text(Arc::from(text.as_ref())),
        );
        self
    }

    /// Bind a numeric field.
    pub fn with_number(mut self, name: impl AsRef<str>, value: f64) -> Self {
        self.bindings
            .insert(Arc::from(name.as_ref()), RowValue::Number(value));
        self
    }

    /// Look up a raw binding by field name.
    pub fn get(&self, name: &str) -> Option<&RowValue> {
        self.bindings.get(name)
    }

    /// The IRI bound to `name`, if the field is present and IRI-valued.
    pub fn iri(&self, name: &str) -> Option<&Arc<str>> {
        match self.bindings.get(name) {
            Some(RowValue::Iri(iri)) => Some(iri),
            _ => None,
        }
    }

    /// The text bound to `name`, if the field is present and text-valued.
    pub fn text(&self, name: &str) -> Option<&Arc<str>> {
        match self.bindings.get(name) {
            Some(RowValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The number bound to `name`, if the field is present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.bindings.get(name) {
            Some(RowValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// True if the row binds no fields.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_distinguish_value_kinds() {
        let row = ResultRow::new()
            .with_iri("entity", "http://example.org/paris")
            .with_text("label", "Paris")
            .with_number("score1", 0.9);

        assert_eq!(row.iri("entity").unwrap().as_ref(), "http://example.org/paris");
        assert_eq!(row.text("label").unwrap().as_ref(), "Paris");
        assert_eq!(row.number("score1"), Some(0.9));

        // Wrong-kind lookups come back empty rather than panicking.
        assert!(row.text("entity").is_none());
        assert!(row.iri("label").is_none());
        assert!(row.number("label").is_none());
    }

    #[test]
    fn test_absent_fields() {
        let row = ResultRow::new().with_text("label2", "Paris, France");
        assert!(row.get("label1").is_none());
        assert!(row.number("score1").is_none());
        assert!(row.text("label2").is_some());
    }
}
