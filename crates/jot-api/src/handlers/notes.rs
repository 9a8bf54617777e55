//! Note CRUD handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use jot_core::{CreateNote, NoteRepository, UpdateNote};

use crate::{extract::Json, ApiError, AppState, Identity};

/// Request body for creating a note.
#[derive(Debug, Deserialize)]
pub struct CreateNoteBody {
    pub title: Option<String>,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request body for updating a note's text and tag set.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteBody {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// GET /note/:id
///
/// Someone else's note is indistinguishable from a missing one: both 404.
pub async fn get_note(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.db.notes.fetch(id, &identity.user_id).await?;
    Ok(Json(note))
}

/// POST /note
///
/// 201 with a Location header pointing at the created note.
pub async fn create_note(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<CreateNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state
        .db
        .notes
        .insert(
            &identity.user_id,
            CreateNote {
                title: body.title,
                text: body.text,
                tags: body.tags,
            },
        )
        .await?;

    let location = format!("/note/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note),
    ))
}

/// PUT /note/:id
pub async fn update_note(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
    Json(body): Json<UpdateNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state
        .db
        .notes
        .update(
            id,
            &identity.user_id,
            UpdateNote {
                text: body.text,
                tags: body.tags,
            },
        )
        .await?;
    Ok(Json(note))
}

/// DELETE /note/:id
pub async fn delete_note(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.delete(id, &identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
