//! Database layer for SnipShare.

/// Snippet storage helpers.
pub mod snippet;
/// redb table definitions.
pub mod tables;


use crate::error::StoreError;
use crate::models::snippet::Snippet;
use std::path::Path;
use std::sync::Arc;

pub use snippet::SnippetDb;

/// Append-only persistence for snippets keyed by id.
///
/// Implementations must enforce id uniqueness themselves: `create` reports
/// [`StoreError::DuplicateId`] instead of overwriting an existing row.
pub trait SnippetStore: Send + Sync {
    /// Insert a new snippet row.
    ///
    /// # Errors
    /// [`StoreError::DuplicateId`] when the id is taken, otherwise any
    /// storage failure.
    fn create(&self, snippet: &Snippet) -> Result<(), StoreError>;

    /// Fetch a snippet by exact id.
    ///
    /// # Returns
    /// `Ok(None)` when no row matches.
    fn get(&self, id: &str) -> Result<Option<Snippet>, StoreError>;
}

impl<S: SnippetStore + ?Sized> SnippetStore for Arc<S> {
    fn create(&self, snippet: &Snippet) -> Result<(), StoreError> {
        (**self).create(snippet)
    }

    fn get(&self, id: &str) -> Result<Option<Snippet>, StoreError> {
        (**self).get(id)
    }
}

/// Database handle with access to the snippet table.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub snippets: SnippetDb,
}

impl Database {
    /// Build a database handle from an existing shared redb instance.
    ///
    /// # Errors
    /// Returns an error if the snippet table cannot be opened.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, StoreError> {
        Ok(Self {
            snippets: SnippetDb::new(db.clone())?,
            db,
        })
    }

    /// Clone this handle for another subsystem in the same process.
    ///
    /// redb holds an exclusive file lock, so a second `open` of the same path
    /// from this process would fail.
    ///
    /// # Errors
    /// Returns an error if table initialization fails.
    pub fn share(&self) -> Result<Self, StoreError> {
        Self::from_shared(self.db.clone())
    }

    /// Open (or create) the database under the directory `path`.
    ///
    /// # Arguments
    /// - `path`: Database directory; created if missing.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or redb cannot
    /// open the file.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| StoreError::Database(redb::Error::Io(err)))?;
        let file = dir.join(tables::REDB_FILE_NAME);
        tracing::debug!("Opening snippet database at {}", file.display());
        let db = Arc::new(redb::Database::create(file)?);
        Self::from_shared(db)
    }
}
