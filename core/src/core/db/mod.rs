//! Database layer for saved queries.
//!
//! Table `saved_queries` maps a monotonically increasing sequence number to a
//! versioned postcard record. Iterating in reverse yields newest first.

use crate::core::db::error::DatabaseError;
use crate::types::{Config, SavedQuery, SavedQueryId};
use redb::{ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};

pub mod error {
    use crate::types::SavedQueryDecodeError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Encode error: {0}")]
        Encode(#[from] postcard::Error),

        #[error("Decode error: {0}")]
        Decode(#[from] SavedQueryDecodeError),

        #[error("Saved query not found")]
        NotFound,
    }
}

/// Saved query table: sequence number → encoded SavedQuery
const SAVED_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("saved_queries");

/// The main database struct wrapping redb.
pub struct Database {
    db: redb::Database,
}

impl Database {
    /// Creates or opens a database using paths from the config.
    pub fn new(config: &Config) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SAVED_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

/// Write operations.
impl Database {
    /// Appends a saved query as the newest entry.
    ///
    /// Returns `Ok(None)` without writing if an equal query (same text and mode)
    /// is already saved.
    pub fn insert(&mut self, saved: &SavedQuery) -> Result<Option<SavedQueryId>, DatabaseError> {
        let encoded = saved.encode()?;
        let write_txn = self.db.begin_write()?;

        let id;
        {
            let mut table = write_txn.open_table(SAVED_TABLE)?;

            for entry in table.iter()? {
                let (_, value) = entry?;
                if SavedQuery::decode(value.value())? == *saved {
                    return Ok(None);
                }
            }

            let next = match table.last()? {
                Some((last, _)) => last.value() + 1,
                None => 1,
            };
            table.insert(next, encoded.as_slice())?;
            id = SavedQueryId::new(next);
        }

        write_txn.commit()?;
        Ok(Some(id))
    }

    /// Returns `Err(NotFound)` if no saved query has this id.
    pub fn remove(&mut self, id: SavedQueryId) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SAVED_TABLE)?;
            let removed = table.remove(id.get())?.is_some();
            if !removed {
                return Err(DatabaseError::NotFound);
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Removes every saved query and returns how many were removed.
    pub fn clear(&mut self) -> Result<u64, DatabaseError> {
        let write_txn = self.db.begin_write()?;
        let count = {
            let table = write_txn.open_table(SAVED_TABLE)?;
            table.len()?
        };
        write_txn.delete_table(SAVED_TABLE)?;
        {
            let _ = write_txn.open_table(SAVED_TABLE)?;
        }
        write_txn.commit()?;
        Ok(count)
    }
}

/// Read operations.
impl Database {
    pub fn get(&self, id: SavedQueryId) -> Result<Option<SavedQuery>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SAVED_TABLE)?;

        match table.get(id.get())? {
            None => Ok(None),
            Some(guard) => Ok(Some(SavedQuery::decode(guard.value())?)),
        }
    }

    /// Returns all saved queries, newest first.
    pub fn list(&self) -> Result<Vec<(SavedQueryId, SavedQuery)>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SAVED_TABLE)?;

        let mut saved = Vec::new();
        for entry in table.iter()?.rev() {
            let (id, value) = entry?;
            saved.push((
                SavedQueryId::new(id.value()),
                SavedQuery::decode(value.value())?,
            ));
        }
        Ok(saved)
    }
}
