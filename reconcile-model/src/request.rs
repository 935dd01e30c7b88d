//! Reconciliation request types.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_LIMIT;

/// Reconciliation request envelope.
///
/// One incoming reconciliation call: free-text query, optional candidate
/// type constraints, a result-size limit, and contextual property/value
/// constraints. Constructed once per call and read-only thereafter.
///
/// # Semantics
///
/// - **`types`**: a matched entity must carry *any* of the listed types
///   (disjunctive). An empty list applies no type constraint.
/// - **`context`**: every property/value pair must hold for the matched
///   entity (conjunctive).
/// - **`limit`**: the number of *unique* candidate entities the caller
///   wants back, after merging matches across label properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    /// The free-text query to reconcile.
    pub query: String,

    /// Candidate type IRIs (disjunctive; empty = unconstrained).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Maximum number of unique candidates to return.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Contextual property constraints.
    #[serde(default, skip_serializing_if = "ReconciliationContext::is_empty")]
    pub context: ReconciliationContext,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl ReconciliationRequest {
    /// Create a request with no type or context constraints.
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            types: Vec::new(),
            limit,
            context: ReconciliationContext::default(),
        }
    }

    /// Add a candidate type IRI.
    pub fn with_type(mut self, type_iri: impl Into<String>) -> Self {
        self.types.push(type_iri.into());
        self
    }

    /// Add a contextual property constraint.
    pub fn with_context_property(mut self, pid: impl Into<String>, value: ContextValue) -> Self {
        self.context.properties.push(PropertyContext {
            pid: pid.into(),
            value,
        });
        self
    }
}

/// Contextual property constraints attached to a reconciliation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconciliationContext {
    /// The property/value pairs, all of which must hold.
    #[serde(default)]
    pub properties: Vec<PropertyContext>,
}

impl ReconciliationContext {
    /// True if the context carries no constraints.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// One contextual property constraint: the entity must have `pid` with
/// exactly `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyContext {
    /// The property IRI.
    pub pid: String,

    /// The required value.
    pub value: ContextValue,
}

/// A context value: either an IRI reference or a (possibly typed) literal.
///
/// Context values are polymorphic on the wire, so the discriminator is an
/// explicit `kind` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContextValue {
    /// An IRI reference.
    Iri {
        /// The IRI value.
        iri: String,
    },

    /// A literal, with an optional datatype IRI.
    Literal {
        /// The lexical form.
        lexical: String,

        /// Datatype IRI (omitted for plain strings).
        #[serde(skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
}

impl ContextValue {
    /// Create an IRI value.
    pub fn iri(iri: impl Into<String>) -> Self {
        ContextValue::Iri { iri: iri.into() }
    }

    /// Create a plain string literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        ContextValue::Literal {
            lexical: lexical.into(),
            datatype: None,
        }
    }

    /// Create a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        ContextValue::Literal {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// Render this value in SPARQL term syntax.
    ///
    /// IRIs render as `<iri>`, plain literals as `"lexical"`, typed
    /// literals as `"lexical"^^<datatype>`. The lexical form is escaped so
    /// the rendered term cannot terminate its enclosing quotes.
    pub fn as_sparql_value(&self) -> String {
        match self {
            ContextValue::Iri { iri } => format!("<{}>", iri),
            ContextValue::Literal {
                lexical,
                datatype: None,
            } => format!("\"{}\"", escape_literal(lexical)),
            ContextValue::Literal {
                lexical,
                datatype: Some(dt),
            } => format!("\"{}\"^^<{}>", escape_literal(lexical), dt),
        }
    }
}

/// Escape special characters for SPARQL string literals.
///
/// Handles: `\` → `\\`, `"` → `\"`, newline → `\n`, tab → `\t`,
/// carriage return → `\r`.
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_roundtrip() {
        let request = ReconciliationRequest::new("lond", 5)
            .with_type("http://example.org/City")
            .with_context_property(
                "http://example.org/country",
                ContextValue::iri("http://example.org/UK"),
            );

        let json = serde_json::to_string(&request).unwrap();
        let parsed: ReconciliationRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.query, "lond");
        assert_eq!(parsed.types, vec!["http://example.org/City"]);
        assert_eq!(parsed.limit, 5);
        assert_eq!(parsed.context.properties.len(), 1);
    }

    #[test]
    fn test_default_limit() {
        let json = r#"{ "query": "paris" }"#;
        let parsed: ReconciliationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.limit, DEFAULT_LIMIT);
        assert!(parsed.types.is_empty());
        assert!(parsed.context.is_empty());
    }

    #[test]
    fn test_context_value_discriminator() {
        let iri_json = r#"{"kind": "iri", "iri": "http://example.org/UK"}"#;
        let lit_json = r#"{"kind": "literal", "lexical": "42", "datatype": "http://www.w3.org/2001/XMLSchema#integer"}"#;

        let iri: ContextValue = serde_json::from_str(iri_json).unwrap();
        let lit: ContextValue = serde_json::from_str(lit_json).unwrap();

        assert!(matches!(iri, ContextValue::Iri { .. }));
        assert!(matches!(lit, ContextValue::Literal { .. }));
    }

    #[test]
    fn test_sparql_rendering() {
        assert_eq!(
            ContextValue::iri("http://example.org/UK").as_sparql_value(),
            "<http://example.org/UK>"
        );
        assert_eq!(
            ContextValue::string("London").as_sparql_value(),
            "\"London\""
        );
        assert_eq!(
            ContextValue::typed("42", "http://www.w3.org/2001/XMLSchema#integer")
                .as_sparql_value(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_sparql_rendering_escapes_quotes() {
        let v = ContextValue::string("say \"hi\"\\bye");
        assert_eq!(v.as_sparql_value(), "\"say \\\"hi\\\"\\\\bye\"");
    }
}
