//! Core domain logic for notedesk.
//! This crate owns the note model, storage access and use-case invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NotePatch};
pub use repo::memory_repo::InMemoryNoteRepository;
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_service::{DeleteAck, NoteService, NoteServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
