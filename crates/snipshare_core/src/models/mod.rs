//! Data models for API requests and persistence.

/// Snippet models and language normalization.
pub mod snippet;
