//! In-process note repository.
//!
//! Keeps notes in insertion order behind a mutex. Used to exercise the note
//! service without SQLite, and by callers that want a throwaway store.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// `Vec`-backed implementation of [`NoteRepository`].
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<Note>>> {
        self.notes
            .lock()
            .map_err(|_| RepoError::InvalidData("in-memory note store lock poisoned".to_string()))
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn list_all(&self) -> RepoResult<Vec<Note>> {
        Ok(self.lock()?.clone())
    }

    fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        Ok(self.lock()?.iter().find(|note| note.id == id).cloned())
    }

    fn insert(&self, title: &str, content: Option<&str>) -> RepoResult<Note> {
        let note = Note::with_id(Uuid::new_v4(), title, content.map(str::to_string));
        self.lock()?.push(note.clone());
        Ok(note)
    }

    fn replace(&self, note: &Note) -> RepoResult<Note> {
        let mut notes = self.lock()?;
        let slot = notes
            .iter_mut()
            .find(|existing| existing.id == note.id)
            .ok_or(RepoError::NotFound(note.id))?;
        slot.clone_from(note);
        Ok(note.clone())
    }

    fn delete_by_id(&self, id: NoteId) -> RepoResult<()> {
        let mut notes = self.lock()?;
        let position = notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;
        notes.remove(position);
        Ok(())
    }
}
