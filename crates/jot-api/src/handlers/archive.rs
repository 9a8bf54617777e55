//! Archive workflow handlers.
//!
//! A thin status-transition layer over the note repository: notes move
//! between Active and Archived, never anywhere else.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use jot_core::NoteRepository;

use crate::{ApiError, AppState, Identity};

/// PUT /archive/:id
///
/// Idempotent: archiving an already-archived note succeeds.
pub async fn archive_note(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.archive(id, &identity.user_id).await?;
    Ok(StatusCode::OK)
}

/// PUT /archive/:id/unarchive
///
/// 400 if the note is not currently archived.
pub async fn unarchive_note(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.unarchive(id, &identity.user_id).await?;
    Ok(StatusCode::OK)
}

/// GET /archive
///
/// The requester's archived notes, most recently modified first.
pub async fn list_archived(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.db.notes.list_archived(&identity.user_id).await?;
    Ok(Json(notes))
}
