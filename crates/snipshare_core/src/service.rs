//! Request-level snippet logic: validation, id allocation, sanitization.

use crate::{
    constants::MAX_ID_ATTEMPTS,
    db::SnippetStore,
    error::{AppError, StoreError, ValidationError},
    escape::escape_html,
    ids,
    models::snippet::{display_language, normalize_language, RenderableSnippet, Snippet},
    Config,
};
use std::sync::Arc;

type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Stateless snippet service over a [`SnippetStore`].
///
/// [`SnippetService::view`] is the single point where stored text is escaped
/// for rendering; nothing escapes on the write path.
pub struct SnippetService<S> {
    store: S,
    max_snippet_size: usize,
    generate_id: IdGenerator,
}

impl<S: SnippetStore> SnippetService<S> {
    /// Build a service over `store` using limits from `config`.
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            max_snippet_size: config.max_snippet_size,
            generate_id: Arc::new(ids::generate_id),
        }
    }

    /// Replace the id source. Used by tests to force collisions.
    pub fn with_id_generator<F>(mut self, generate_id: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.generate_id = Arc::new(generate_id);
        self
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and persist a new snippet.
    ///
    /// Content is stored verbatim; only the emptiness check looks at the
    /// trimmed text. The language is normalized and may be stored empty.
    ///
    /// # Arguments
    /// - `raw_content`: Snippet text as submitted.
    /// - `raw_language`: Language label as submitted.
    ///
    /// # Returns
    /// The new snippet id.
    ///
    /// # Errors
    /// - [`AppError::Validation`] for empty or oversized content.
    /// - [`AppError::ServiceUnavailable`] when every id attempt collided.
    /// - [`AppError::Storage`] when the store rejects the write.
    pub fn save(&self, raw_content: &str, raw_language: &str) -> Result<String, AppError> {
        if raw_content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }
        if raw_content.len() > self.max_snippet_size {
            return Err(ValidationError::ContentTooLarge {
                max: self.max_snippet_size,
            }
            .into());
        }

        let language = normalize_language(raw_language);
        let mut snippet = Snippet::new(String::new(), raw_content.to_string(), language);

        for attempt in 1..=MAX_ID_ATTEMPTS {
            snippet.id = (self.generate_id)();
            match self.store.create(&snippet) {
                Ok(()) => return Ok(snippet.id),
                Err(StoreError::DuplicateId(id)) => {
                    tracing::warn!(%id, attempt, "snippet id collision; regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(AppError::ServiceUnavailable {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Load a snippet and prepare it for rendering.
    ///
    /// # Returns
    /// A [`RenderableSnippet`] with escaped content and a display language.
    ///
    /// # Errors
    /// - [`AppError::NotFound`] for empty, malformed, or unknown ids. Ids
    ///   match exactly; surrounding whitespace is not stripped.
    /// - [`AppError::Storage`] when the lookup fails.
    pub fn view(&self, id: &str) -> Result<RenderableSnippet, AppError> {
        if !ids::is_well_formed_id(id) {
            return Err(AppError::NotFound);
        }

        let snippet = self.store.get(id)?.ok_or(AppError::NotFound)?;
        Ok(RenderableSnippet {
            escaped_content: escape_html(&snippet.content),
            language: escape_html(display_language(&snippet.language)),
            id: snippet.id,
        })
    }
}
