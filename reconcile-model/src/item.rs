//! Outbound result item type.

use serde::{Deserialize, Serialize};

/// A single reconciliation candidate.
///
/// This type is shared across the query core, service, and serialization
/// layers to ensure a consistent representation of results. The relevance
/// score is *not* retained: scores exist only to arbitrate which label wins
/// during interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// The IRI identifying the candidate (entity, type, or property).
    pub id: String,

    /// The chosen label for the candidate.
    pub label: String,
}

impl SearchResultItem {
    /// Create a new result item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serialization() {
        let item = SearchResultItem::new("http://example.org/paris", "Paris");
        let json = serde_json::to_string(&item).unwrap();
        let parsed: SearchResultItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
