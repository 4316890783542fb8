//! Shared test-only helpers for snipshare_core.

use crate::{Config, Database, SnippetDb, SnippetService};
use std::path::Path;
use tempfile::TempDir;

/// Config pointing at a database directory under `dir`.
pub(crate) fn test_config(dir: &Path) -> Config {
    Config {
        db_path: dir.join("db").to_string_lossy().to_string(),
        port: 0,
        max_snippet_size: 10_000_000,
        store_timeout_ms: 5_000,
        bind: None,
        allow_public_access: false,
    }
}

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation or database initialization fails.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = test_config(temp_dir.path());
    let db = Database::new(&config.db_path).expect("db");
    (db, temp_dir)
}

/// Creates a service over an isolated temporary database.
pub(crate) fn setup_temp_service() -> (SnippetService<SnippetDb>, TempDir) {
    let (db, temp_dir) = setup_temp_db();
    let config = test_config(temp_dir.path());
    (SnippetService::new(db.snippets, &config), temp_dir)
}
