//! Note handlers
//!
//! Short operator observations keyed by character name.

use axum::{extract::State, Json};
use guild_service::dto::{NoteResponse, SaveNoteRequest};
use guild_service::NoteService;

use crate::extractors::{NamePath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List all notes
///
/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = NoteService::new(state.service_context()).list().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Get the note for a name
///
/// GET /notes/{name}
pub async fn get_note(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteService::new(state.service_context()).get(&name).await?;
    Ok(Json(NoteResponse::from(note)))
}

/// Create or replace a note
///
/// POST /notes
pub async fn save_note(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SaveNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteService::new(state.service_context())
        .save(&request.name, &request.message)
        .await?;
    Ok(Json(NoteResponse::from(note)))
}

/// Delete a note; a missing note is not an error
///
/// DELETE /notes/{name}
pub async fn delete_note(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<NoContent> {
    NoteService::new(state.service_context()).delete(&name).await?;
    Ok(NoContent)
}
