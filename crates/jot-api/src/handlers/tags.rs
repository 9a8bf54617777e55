//! Tag management handlers.
//!
//! Tags are global: listing and tag-scoped note lookup are not filtered
//! by owner. Mutations still require an authenticated caller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use jot_core::TagRepository;

use crate::{extract::Json, ApiError, AppState, Identity};

/// Request body for renaming a tag.
#[derive(Debug, Deserialize)]
pub struct RenameTagBody {
    pub name: String,
}

/// GET /tag
pub async fn list_tags(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<impl IntoResponse, ApiError> {
    let tags = state.db.tags.list().await?;
    Ok(Json(tags))
}

/// GET /tag/:name
///
/// Case-insensitive exact match; returns notes from every owner.
pub async fn notes_by_tag(
    State(state): State<AppState>,
    _identity: Identity,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.db.tags.notes_for(&name).await?;
    Ok(Json(notes))
}

/// PUT /tag/:name
pub async fn rename_tag(
    State(state): State<AppState>,
    _identity: Identity,
    Path(name): Path<String>,
    Json(body): Json<RenameTagBody>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.tags.rename(&name, &body.name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tag/:name
pub async fn delete_tag(
    State(state): State<AppState>,
    _identity: Identity,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.tags.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
