//! Environment-driven server configuration.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Malformed values are reported with the variable name; loading never
//!   panics.

use notedesk_core::db::{open_db, open_db_in_memory, DbResult};
use notedesk_core::default_log_level;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "NOTEDESK_BIND_ADDR";
pub const DATABASE_VAR: &str = "NOTEDESK_DATABASE";
pub const LOG_LEVEL_VAR: &str = "NOTEDESK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "NOTEDESK_LOG_DIR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Database value selecting a process-lifetime in-memory store.
pub const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid {key} value `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Where notes are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Memory,
    File(PathBuf),
}

impl DatabaseLocation {
    fn parse(value: &str) -> Self {
        if value == MEMORY_DATABASE {
            Self::Memory
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Opens and migrates the configured database.
    pub fn open(&self) -> DbResult<Connection> {
        match self {
            Self::Memory => open_db_in_memory(),
            Self::File(path) => open_db(path),
        }
    }
}

impl Display for DatabaseLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseLocation,
    /// Passed through to `init_logging`, which validates it.
    pub log_level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_text = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_text
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidValue {
                key: BIND_ADDR_VAR,
                value: bind_text.clone(),
                reason: err.to_string(),
            })?;

        let database = read(DATABASE_VAR)
            .map_or(DatabaseLocation::Memory, |value| {
                DatabaseLocation::parse(&value)
            });

        Ok(Self {
            bind_addr,
            database,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
        })
    }
}
