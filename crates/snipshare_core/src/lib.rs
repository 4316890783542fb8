//! Core domain library for SnipShare (config, storage, models, service).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Snippet storage layer backed by redb.
pub mod db;
/// Application error types (storage/domain).
pub mod error;
/// Render-time HTML escaping.
pub mod escape;
/// Snippet identifier generation and validation.
pub mod ids;
/// Data models for API requests, persistence, and rendering.
pub mod models;
/// Request-level snippet logic (validation, id retry, sanitization).
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::{DEFAULT_LANGUAGE_LABEL, DEFAULT_PORT};
pub use db::{Database, SnippetDb, SnippetStore};
pub use error::{AppError, StoreError, ValidationError};
pub use models::snippet::{RenderableSnippet, Snippet};
pub use service::SnippetService;
