//! Note use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete note APIs.
//! - Turn storage absence into the `NoteNotFound` domain error.
//!
//! # Invariants
//! - `update_note` is a partial merge: fields absent from the patch survive.
//! - Update and delete fetch first and fail with `NoteNotFound` before any
//!   write happens.
//! - Log events carry ids only, never titles or content.

use crate::model::note::{Note, NoteId, NotePatch};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every persisted note.
    pub fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        let notes = self.repo.list_all()?;
        debug!(
            "event=note_list module=service status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Gets one note by id.
    ///
    /// # Errors
    /// - `NoteNotFound` when no note has this id.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo
            .get_by_id(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Creates one note. `title` presence is checked by the caller's input
    /// boundary; any string, including empty, is stored as given.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: Option<String>,
    ) -> Result<Note, NoteServiceError> {
        let title = title.into();
        let note = self.repo.insert(title.as_str(), content.as_deref())?;
        info!(
            "event=note_create module=service status=ok note_id={}",
            note.id
        );
        Ok(note)
    }

    /// Merges the supplied fields onto an existing note and persists it.
    ///
    /// # Errors
    /// - `NoteNotFound` when no note has this id.
    pub fn update_note(&self, id: NoteId, patch: &NotePatch) -> Result<Note, NoteServiceError> {
        let mut note = self.get_note(id)?;
        patch.apply_to(&mut note);
        let stored = self.repo.replace(&note)?;
        info!(
            "event=note_update module=service status=ok note_id={} title_changed={} content_changed={}",
            id,
            patch.title.is_some(),
            patch.content.is_some()
        );
        Ok(stored)
    }

    /// Deletes one note.
    ///
    /// # Errors
    /// - `NoteNotFound` when no note has this id.
    pub fn delete_note(&self, id: NoteId) -> Result<DeleteAck, NoteServiceError> {
        let note = self.get_note(id)?;
        self.repo.delete_by_id(note.id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(DeleteAck { success: true })
    }
}
