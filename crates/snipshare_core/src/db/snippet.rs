//! Snippet storage operations backed by redb.

use super::{tables::SNIPPETS, SnippetStore};
use crate::{error::StoreError, models::snippet::Snippet};
use redb::{ReadableDatabase, ReadableTable, ReadableTableMetadata};
use std::sync::Arc;

/// Accessor for the snippet table.
pub struct SnippetDb {
    db: Arc<redb::Database>,
}

impl SnippetDb {
    /// Initialize the snippet table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, StoreError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SNIPPETS)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new snippet row.
    ///
    /// The existence check and insert share one write transaction, and redb
    /// serializes writers, so two concurrent creates with the same id cannot
    /// both succeed.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] when the id already exists, or a
    /// storage/serialization error.
    pub fn create(&self, snippet: &Snippet) -> Result<(), StoreError> {
        let encoded = bincode::serialize(snippet)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            if snippets.get(snippet.id.as_str())?.is_some() {
                return Err(StoreError::DuplicateId(snippet.id.clone()));
            }
            snippets.insert(snippet.id.as_str(), encoded.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(id = %snippet.id, bytes = snippet.content.len(), "snippet stored");
        Ok(())
    }

    /// Fetch a snippet by id.
    ///
    /// # Returns
    /// `Ok(Some(snippet))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: &str) -> Result<Option<Snippet>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let snippets = read_txn.open_table(SNIPPETS)?;
        match snippets.get(id)? {
            Some(value) => Ok(Some(bincode::deserialize(value.value())?)),
            None => Ok(None),
        }
    }

    /// Number of stored snippets.
    ///
    /// # Errors
    /// Returns an error when storage access fails.
    pub fn count(&self) -> Result<u64, StoreError> {
        let read_txn = self.db.begin_read()?;
        let snippets = read_txn.open_table(SNIPPETS)?;
        Ok(snippets.len()?)
    }
}

impl SnippetStore for SnippetDb {
    fn create(&self, snippet: &Snippet) -> Result<(), StoreError> {
        SnippetDb::create(self, snippet)
    }

    fn get(&self, id: &str) -> Result<Option<Snippet>, StoreError> {
        SnippetDb::get(self, id)
    }
}
