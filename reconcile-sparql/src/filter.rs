//! Composable query-fragment builders.
//!
//! Each filter is a typed value over borrowed request data, rendered
//! through `fmt::Display` exactly once when the enclosing query shape is
//! rendered. Fragments follow fixed trailing-dot/whitespace conventions so
//! they concatenate without separator bugs: an empty filter renders as the
//! empty string and imposes no constraint.

use std::fmt;

use reconcile_model::PropertyContext;

/// Disjunctive type constraint: the entity must have `rdf:type` equal to
/// *any* of the listed type IRIs.
///
/// Renders as a braced `UNION` group, e.g. for two types:
/// `` {{?entity rdf:type <T1>. } UNION {?entity rdf:type <T2>. }}``.
/// An empty type list renders nothing.
#[derive(Debug, Clone, Copy)]
pub struct TypeFilter<'a>(pub &'a [String]);

impl fmt::Display for TypeFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" {")?;
        for (i, type_iri) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" UNION ")?;
            }
            write!(f, "{{?entity rdf:type <{}>. }}", type_iri)?;
        }
        f.write_str("}")
    }
}

/// Conjunctive context constraint: one equality clause per property/value
/// pair, each binding `?entity` to the pre-rendered SPARQL value.
#[derive(Debug, Clone, Copy)]
pub struct ContextFilter<'a>(pub &'a [PropertyContext]);

impl fmt::Display for ContextFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prop in self.0 {
            write!(f, "?entity <{}> {}. ", prop.pid, prop.value.as_sparql_value())?;
        }
        Ok(())
    }
}

/// Full-text label search across one or more label properties.
///
/// Each property contributes a self-contained disjunct pairing a
/// `text:query` clause (prefix-wildcard search, per-branch limit) with an
/// equality clause binding the matched value to the shared `?label`
/// variable; disjuncts join with `UNION`. The shared variable is what makes
/// searching several label vocabularies one logical OR.
#[derive(Debug, Clone, Copy)]
pub struct LabelFilter<'a> {
    /// Label property IRIs to search.
    pub properties: &'a [String],
    /// Query text, already escaped via [`escape_query`](crate::escape_query).
    pub escaped_query: &'a str,
    /// Per-branch match limit.
    pub branch_limit: usize,
}

impl fmt::Display for LabelFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(" UNION ")?;
            }
            write!(
                f,
                "{{?entity text:query (<{}> '{}*' {}) . ?entity <{}> ?label . }}",
                property, self.escaped_query, self.branch_limit, property
            )?;
        }
        Ok(())
    }
}
