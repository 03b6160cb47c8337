//! Core storage implementation for saved queries.

use crate::core::db::Database;
use crate::core::db::error::DatabaseError;
use crate::types::{Config, QueryText, SavedQuery, SavedQueryId, SearchMode};
use error::CoreError;
use std::path::{Path, PathBuf};

pub(crate) mod db;

pub use db::error::DatabaseError as SavedQueryDatabaseError;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum CoreError {
        #[error("Database error: {0}")]
        Database(#[from] DatabaseError),

        #[error("Saved query {0} not found")]
        SavedQueryNotFound(SavedQueryId),
    }
}

pub struct MarkSiftCore {
    base_path: PathBuf,
    db: Database,
}

impl MarkSiftCore {
    pub fn open(config: Config) -> Result<Self, CoreError> {
        let db = Database::new(&config)?;
        Ok(Self {
            base_path: config.base_path,
            db,
        })
    }

    /// Returns the base data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.base_path
    }
}

/// Saved query operations.
impl MarkSiftCore {
    /// Saves a query as the newest entry.
    ///
    /// Returns `None` if the same query with the same mode is already saved.
    pub fn save_query(
        &mut self,
        query: QueryText,
        mode: SearchMode,
    ) -> Result<Option<SavedQueryId>, CoreError> {
        let saved = SavedQuery::new(query, mode);
        let id = self.db.insert(&saved)?;
        match id {
            Some(id) => tracing::debug!(%id, query = %saved.query, "saved query"),
            None => tracing::debug!(query = %saved.query, "query already saved, skipping"),
        }
        Ok(id)
    }

    /// Returns saved queries, newest first.
    pub fn saved_queries(&self) -> Result<Vec<(SavedQueryId, SavedQuery)>, CoreError> {
        Ok(self.db.list()?)
    }

    pub fn saved_query(&self, id: SavedQueryId) -> Result<SavedQuery, CoreError> {
        self.db
            .get(id)?
            .ok_or(CoreError::SavedQueryNotFound(id))
    }

    pub fn remove_saved_query(&mut self, id: SavedQueryId) -> Result<(), CoreError> {
        match self.db.remove(id) {
            Ok(()) => Ok(()),
            Err(DatabaseError::NotFound) => Err(CoreError::SavedQueryNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the number of removed queries.
    pub fn clear_saved_queries(&mut self) -> Result<u64, CoreError> {
        Ok(self.db.clear()?)
    }
}
