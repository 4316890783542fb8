//! Snippet HTTP handlers.

use super::run_store_call;
use crate::{error::HttpError, models::snippet::*, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};

async fn save(
    state: &AppState,
    content: String,
    language: String,
) -> Result<(StatusCode, Json<SaveSnippetResponse>), HttpError> {
    let id = run_store_call(state, move |service| service.save(&content, &language)).await?;
    tracing::info!(%id, "snippet saved");
    Ok((StatusCode::CREATED, Json(SaveSnippetResponse { id })))
}

/// Save a new snippet from a JSON payload.
///
/// # Returns
/// `201 Created` with the new snippet id.
///
/// # Errors
/// Returns an error if validation, id allocation, or persistence fails.
pub async fn create_snippet(
    State(state): State<AppState>,
    Json(req): Json<SaveSnippetRequest>,
) -> Result<(StatusCode, Json<SaveSnippetResponse>), HttpError> {
    save(&state, req.content, req.language.unwrap_or_default()).await
}

/// Save a new snippet from an HTML form post (`code`, `lang`).
///
/// # Returns
/// `201 Created` with the new snippet id.
///
/// # Errors
/// Returns an error if validation, id allocation, or persistence fails.
pub async fn create_snippet_form(
    State(state): State<AppState>,
    Form(form): Form<SaveSnippetForm>,
) -> Result<(StatusCode, Json<SaveSnippetResponse>), HttpError> {
    save(&state, form.code, form.lang).await
}

/// Fetch a snippet prepared for rendering.
///
/// # Returns
/// The escaped snippet as JSON.
///
/// # Errors
/// Returns an error if the snippet does not exist or lookup fails.
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RenderableSnippet>, HttpError> {
    let rendered = run_store_call(&state, move |service| service.view(&id)).await?;
    Ok(Json(rendered))
}
