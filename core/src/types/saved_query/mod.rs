use crate::types::QueryText;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Leading byte of every encoded [`SavedQuery`].
const SAVED_QUERY_VERSION: u8 = 1;

/// Flags a query is run with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchMode {
    /// Match only against `tag:` markers.
    pub tags_only: bool,
    /// Treat every term as a regular expression.
    pub use_regex: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub query: QueryText,
    pub mode: SearchMode,
}

/// Sequence number of a saved query. Higher is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SavedQueryId(u64);

impl SavedQueryId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SavedQueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SavedQueryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Error)]
pub enum SavedQueryDecodeError {
    #[error("empty saved query record")]
    Empty,

    #[error("unsupported saved query version: {0}")]
    UnsupportedVersion(u8),

    #[error("postcard error: {0}")]
    Postcard(#[from] postcard::Error),
}

impl SavedQuery {
    pub fn new(query: QueryText, mode: SearchMode) -> Self {
        Self { query, mode }
    }

    /// Encodes as a version byte followed by the postcard payload.
    pub(crate) fn encode(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_extend(self, vec![SAVED_QUERY_VERSION])
    }

    pub(crate) fn decode(data: &[u8]) -> Result<Self, SavedQueryDecodeError> {
        let (version, payload) = data
            .split_first()
            .ok_or(SavedQueryDecodeError::Empty)?;
        match *version {
            SAVED_QUERY_VERSION => Ok(postcard::from_bytes(payload)?),
            other => Err(SavedQueryDecodeError::UnsupportedVersion(other)),
        }
    }
}
