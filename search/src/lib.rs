//! Boolean query search over bookmark documents.
//!
//! Queries combine terms with `AND`, `OR`, `NOT` and parentheses; adjacent
//! terms are implicitly ANDed. Terms are matched case- and accent-insensitively
//! as substrings, or as regular expressions when written `re:pattern` or
//! `/pattern/`. In tags-only mode terms match the `tag:` markers of a
//! document's description instead of its full text.
//!
//! # Pipeline
//!
//! - [`tokenize`] the query, then [`parse`] it into an [`Expression`].
//! - Build a [`MatchContext`] per document.
//! - [`evaluate`] the expression against each context.
//! - [`collect_terms`] annotates each hit with the terms that matched it.
//!
//! [`search`] and [`SearchEngine`] run the whole pipeline as a linear scan.

mod collect;
mod config;
mod context;
mod engine;
mod error;
mod evaluate;
mod matcher;
mod normalize;
mod query;
mod results;

pub use collect::{CollectedTerm, collect_terms};
pub use config::{DEFAULT_MAX_TOKENS, SearchConfig};
pub use context::MatchContext;
pub use engine::{Query, SearchEngine, search};
pub use error::SearchError;
pub use evaluate::{evaluate, evaluate_with};
pub use matcher::{CompiledTerm, matches};
pub use normalize::{normalize_term, normalize_text};
pub use query::{DEFAULT_MAX_DEPTH, Expression, Parser, TermPattern, Token, parse, tokenize};
pub use results::{QueryWarning, SearchHit, SearchOutcome};

#[cfg(test)]
mod tests;
