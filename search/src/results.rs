//! Search result types.

use crate::collect::CollectedTerm;
use marksift_core::types::Document;
use std::fmt;

/// A matching document with the query terms that hold for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub document: &'a Document,
    pub matched_terms: Vec<CollectedTerm>,
}

impl SearchHit<'_> {
    /// Returns true if `term` (compared by raw text) matched this document.
    pub fn is_matched(&self, term: &CollectedTerm) -> bool {
        self.matched_terms.iter().any(|matched| matched.raw == term.raw)
    }
}

/// Everything one search produced. Hits keep the input document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    pub hits: Vec<SearchHit<'a>>,
    /// All query terms, in query order.
    pub terms: Vec<CollectedTerm>,
    pub warnings: Vec<QueryWarning>,
    /// Number of documents evaluated.
    pub scanned: usize,
}

impl SearchOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

/// A non-fatal problem with the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    /// The term's pattern failed to compile and matches nothing.
    InvalidRegex { term: String, reason: String },
    /// Tokens past the configured limit were dropped.
    TruncatedQuery { kept: usize, dropped: usize },
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryWarning::InvalidRegex { term, reason } => {
                write!(f, "invalid regular expression in {term:?}: {reason}")
            }
            QueryWarning::TruncatedQuery { kept, dropped } => {
                write!(f, "query too long: kept {kept} tokens, dropped {dropped}")
            }
        }
    }
}
