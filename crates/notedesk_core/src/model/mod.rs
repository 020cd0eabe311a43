//! Domain model for notes.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned by storage.
//! - Deletion is a hard delete; there are no tombstones.

pub mod note;
