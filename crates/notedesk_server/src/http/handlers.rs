//! Route handlers for the notes API.
//!
//! # Responsibility
//! - Decode path ids and JSON bodies into service inputs.
//! - Run one note use-case per request and pick the success status.
//!
//! # Invariants
//! - Creation answers 201; every other success answers 200.
//! - A path id that is not a UUID is reported as a missing note.

use crate::http::dto::{
    CreateNoteRequest, HealthResponse, NoteListResponse, UpdateNoteRequest,
};
use crate::http::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use notedesk_core::{core_version, DeleteAck, Note, NoteId, NotePatch};

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: core_version().to_string(),
    })
}

pub(crate) async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let items = state.with_notes(|service| service.list_notes()).await?;
    Ok(Json(NoteListResponse { items }))
}

pub(crate) async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    let note = state.with_notes(move |service| service.get_note(id)).await?;
    Ok(Json(note))
}

pub(crate) async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(request) = payload?;
    let title = request
        .title
        .ok_or_else(|| ApiError::InvalidRequest("`title` is required".to_string()))?;
    let content = request.content;

    let note = state
        .with_notes(move |service| service.create_note(title, content))
        .await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub(crate) async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    let Json(request) = payload?;
    let patch = NotePatch::from(request);

    let note = state
        .with_notes(move |service| service.update_note(id, &patch))
        .await?;
    Ok(Json(note))
}

pub(crate) async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let id = parse_note_id(&id)?;
    let ack = state
        .with_notes(move |service| service.delete_note(id))
        .await?;
    Ok(Json(ack))
}

// Ids are opaque to clients: anything that is not a UUID addresses no note.
fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    NoteId::parse_str(raw).map_err(|_| ApiError::NotFound(format!("note not found: {raw}")))
}
