//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted record shape.
//! - Define partial-update merge semantics (`NotePatch`).
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` is always present; empty strings are allowed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a persisted note.
pub type NoteId = Uuid;

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned by the storage layer on insert, immutable afterwards.
    pub id: NoteId,
    pub title: String,
    /// Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Note {
    /// Builds a note with a caller-provided id.
    ///
    /// Storage implementations use this when materializing rows; services
    /// never mint ids themselves.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content,
        }
    }
}

/// Partial update for an existing note.
///
/// Fields left as `None` are not touched. `content` is tri-state:
/// `Some(None)` clears the stored content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
}

impl NotePatch {
    /// Patch that replaces only the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// Patch that replaces only the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(Some(content.into())),
        }
    }

    /// Merges supplied fields onto `note`. The id is never changed.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            note.content.clone_from(content);
        }
    }
}
