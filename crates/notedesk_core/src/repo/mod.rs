//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage-accessor contract the note service depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Ids are minted here, never by callers.

pub mod memory_repo;
pub mod note_repo;
