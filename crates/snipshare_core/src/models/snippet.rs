//! Snippet data models.

use crate::constants::{DEFAULT_LANGUAGE_LABEL, LANGUAGE_MAX_CHARS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snippet row as stored in the database.
///
/// `content` is kept verbatim. Escaping belongs to the render path
/// ([`RenderableSnippet`]), never to storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,
    pub content: String,
    /// Normalized label; may be empty.
    pub language: String,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// Create a snippet row stamped with the current time.
    pub fn new(id: String, content: String, language: String) -> Self {
        Self {
            id,
            content,
            language,
            created_at: Utc::now(),
        }
    }
}

/// Render-ready view of a snippet. Every string field is safe to embed in
/// HTML without further processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderableSnippet {
    pub id: String,
    pub escaped_content: String,
    pub language: String,
}

/// JSON request payload for saving a snippet.
#[derive(Debug, Deserialize)]
pub struct SaveSnippetRequest {
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Form payload for saving a snippet, using the HTML form field names.
#[derive(Debug, Deserialize)]
pub struct SaveSnippetForm {
    pub code: String,
    #[serde(default)]
    pub lang: String,
}

/// Response payload for a saved snippet.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveSnippetResponse {
    pub id: String,
}

/// Normalize a raw language label for storage.
///
/// Trims, lowercases, and truncates to [`LANGUAGE_MAX_CHARS`] characters.
/// Truncation counts characters, so multibyte labels never split a code point.
///
/// # Returns
/// The normalized label, possibly empty.
pub fn normalize_language(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .take(LANGUAGE_MAX_CHARS)
        .collect()
}

/// Label to render for a stored language, falling back to
/// [`DEFAULT_LANGUAGE_LABEL`] when none was given.
pub fn display_language(stored: &str) -> &str {
    if stored.is_empty() {
        DEFAULT_LANGUAGE_LABEL
    } else {
        stored
    }
}
