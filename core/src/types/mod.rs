pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, GeneralConfig, SearchSettings};

pub(crate) mod document;
pub use document::Document;

pub(crate) mod query_text;
pub use query_text::{MAX_QUERY_LENGTH, QueryText, QueryTextError};

pub(crate) mod saved_query;
pub use saved_query::{SavedQuery, SavedQueryDecodeError, SavedQueryId, SearchMode};
