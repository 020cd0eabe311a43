//! Shared request state.
//!
//! # Invariants
//! - One SQLite connection per process, guarded by a mutex.
//! - Service calls run on the blocking pool; the lock is never held across
//!   an `.await`.

use crate::http::error::ApiError;
use notedesk_core::{NoteService, NoteServiceError, SqliteNoteRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection for sharing across handlers.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one note use-case against the shared connection.
    ///
    /// The whole closure executes under the connection lock, so a
    /// read-then-write sequence inside it is serialized against other
    /// requests in this process.
    pub async fn with_notes<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&NoteService<SqliteNoteRepository<'_>>) -> Result<T, NoteServiceError>
            + Send
            + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| ApiError::Internal("database connection lock poisoned".to_string()))?;
            let repo = SqliteNoteRepository::try_new(&guard).map_err(NoteServiceError::from)?;
            let service = NoteService::new(repo);
            op(&service).map_err(ApiError::from)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("note task failed: {err}")))?
    }
}
