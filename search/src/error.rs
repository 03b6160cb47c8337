use marksift_core::types::QueryTextError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty or whitespace; no document was scanned.
    #[error("no search query supplied")]
    EmptyQuery,
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryTextError),
}
