//! Escaping of user text for embedding in full-text search clauses.
//!
//! Raw query text passes through two layers on its way into a composed
//! query: the Lucene query-parser syntax inside `text:query (...)`, and the
//! single-quoted SPARQL string literal that carries the search phrase. Each
//! layer has its own escaping, applied in a fixed order.

/// Characters treated as operators by the Lucene classic query parser.
const SEARCH_SYNTAX_SPECIALS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&', '/',
];

/// Neutralize full-text search operators by backslash-prefixing them.
///
/// This covers the Lucene classic syntax specials, including the two-char
/// operators `&&` and `||` (escaping each `&`/`|` individually neutralizes
/// both forms).
pub fn escape_search_syntax(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if SEARCH_SYNTAX_SPECIALS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Neutralize characters unsafe inside a single-quoted query string literal.
///
/// Every backslash is doubled and every single quote gains a backslash, so
/// the result cannot terminate its enclosing literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out
}

/// Escape raw user text for verbatim embedding inside a single-quoted
/// full-text search phrase.
///
/// Search-syntax escaping runs first; the string-literal pass then doubles
/// all backslashes, including the ones the first pass inserted. Running the
/// passes in the other order would re-escape the literal pass's own
/// insertions.
pub fn escape_query(raw: &str) -> String {
    escape_string_literal(&escape_search_syntax(raw))
}
