use crate::query::DEFAULT_MAX_DEPTH;
use marksift_core::types::SearchSettings;

/// Default cap on query tokens before truncation.
pub const DEFAULT_MAX_TOKENS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Restrict matching to the tags parsed from each description.
    pub tags_only: bool,
    /// Treat every term as a regular expression.
    pub use_regex_all: bool,
    /// Nesting depth (groups and `NOT`) beyond which the parser flattens.
    pub max_depth: usize,
    pub max_tokens: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tags_only: false,
            use_regex_all: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            tags_only: settings.tags_only,
            use_regex_all: settings.use_regex,
            max_depth: settings.max_depth,
            max_tokens: settings.max_tokens,
        }
    }
}
