//! HTTP request handlers.

/// Snippet endpoints.
pub mod snippet;

use crate::{AppError, AppState};
use snipshare_core::{SnippetDb, SnippetService, StoreError};

/// Run a service call on the blocking pool, bounded by the configured store
/// timeout.
///
/// A timed-out call is not cancelled: a save may still commit after the
/// caller has been told it failed.
///
/// # Errors
/// Returns [`StoreError::Timeout`] when the call overruns, or
/// [`StoreError::Task`] when the blocking task panics. Otherwise propagates
/// the service result.
pub(crate) async fn run_store_call<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&SnippetService<SnippetDb>) -> Result<T, AppError> + Send + 'static,
{
    let service = state.service.clone();
    let timeout = state.config.store_timeout();
    let task = tokio::task::spawn_blocking(move || op(&service));
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(StoreError::Task(join_err.to_string()).into()),
        Err(_) => Err(StoreError::Timeout(timeout).into()),
    }
}
