//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/get/insert/replace/delete over the `notes` table.
//! - Keep SQL inside the core persistence boundary.
//!
//! # Invariants
//! - `insert` assigns a fresh UUID v4 to every new row.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "required column `{table}.{column}` is missing; run migrations first"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage accessor for persisted notes.
///
/// `replace` and `delete_by_id` expect the caller to have checked existence;
/// they still report `RepoError::NotFound` when no row was touched.
pub trait NoteRepository {
    /// Returns every persisted note. Order is not part of the contract.
    fn list_all(&self) -> RepoResult<Vec<Note>>;
    /// Looks up one note; `None` when no row matches.
    fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Persists a new note under a freshly generated id.
    fn insert(&self, title: &str, content: Option<&str>) -> RepoResult<Note>;
    /// Overwrites all mutable fields of an existing note.
    fn replace(&self, note: &Note) -> RepoResult<Note>;
    /// Removes one note.
    fn delete_by_id(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema has
    ///   not been migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn insert(&self, title: &str, content: Option<&str>) -> RepoResult<Note> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO notes (id, title, content) VALUES (?1, ?2, ?3);",
            params![id.to_string(), title, content],
        )?;

        self.get_by_id(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("inserted note {id} missing on read-back"))
        })
    }

    fn replace(&self, note: &Note) -> RepoResult<Note> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                content = ?3
             WHERE id = ?1;",
            params![note.id.to_string(), note.title.as_str(), note.content.as_deref()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(note.id));
        }

        Ok(note.clone())
    }

    fn delete_by_id(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id")))?;

    Ok(Note {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in ["id", "title", "content"] {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
