//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for notedesk core.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write notes before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Kind of connection requested from `open_db*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    File,
    Memory,
}

impl OpenMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl Display for OpenMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage failure, tagged with the bootstrap stage it happened in.
#[derive(Debug)]
pub enum DbError {
    /// SQLite could not open the connection at all.
    Open {
        mode: OpenMode,
        source: rusqlite::Error,
    },
    /// Connection opened but pragmas/busy timeout could not be applied.
    Configure {
        mode: OpenMode,
        source: rusqlite::Error,
    },
    /// A migration step failed; the schema stays at its previous version.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Statement failure on a ready connection.
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Stable code, mirrored in the `error_code` field of `db_open` events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "db_open_failed",
            Self::Configure { .. } => "db_configure_failed",
            Self::Migration { .. } => "db_migration_failed",
            Self::UnsupportedSchemaVersion { .. } => "db_schema_unsupported",
            Self::Sqlite(_) => "db_query_failed",
        }
    }

    /// Connection mode, for failures raised while opening.
    pub fn mode(&self) -> Option<OpenMode> {
        match self {
            Self::Open { mode, .. } | Self::Configure { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { mode, source } => write!(f, "cannot open {mode} database: {source}"),
            Self::Configure { mode, source } => {
                write!(f, "cannot configure {mode} database connection: {source}")
            }
            Self::Migration { version, source } => {
                write!(f, "schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. }
            | Self::Configure { source, .. }
            | Self::Migration { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
