use notedesk_core::db::open_db_in_memory;
use notedesk_core::{
    Note, NotePatch, NoteRepository, NoteService, NoteServiceError, RepoError,
    SqliteNoteRepository,
};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn insert_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let inserted = repo.insert("first note", Some("body")).unwrap();
    let loaded = repo.get_by_id(inserted.id).unwrap().unwrap();

    assert_eq!(loaded, inserted);
    assert_eq!(loaded.title, "first note");
    assert_eq!(loaded.content.as_deref(), Some("body"));
}

#[test]
fn insert_without_content_stores_null() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let inserted = repo.insert("", None).unwrap();
    assert_eq!(inserted.title, "");
    assert_eq!(inserted.content, None);

    let is_null: bool = conn
        .query_row(
            "SELECT content IS NULL FROM notes WHERE id = ?1;",
            [inserted.id.to_string()],
            |row| row.get(0),
        )
        .unwrap();
    assert!(is_null);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    assert!(repo.get_by_id(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn replace_and_delete_missing_rows_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let ghost = Note::with_id(Uuid::new_v4(), "ghost", None);

    assert!(matches!(repo.replace(&ghost), Err(RepoError::NotFound(id)) if id == ghost.id));
    assert!(matches!(
        repo.delete_by_id(ghost.id),
        Err(RepoError::NotFound(id)) if id == ghost.id
    ));
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let titles = ["alpha", "beta", "gamma"];
    let inserted: Vec<Note> = titles
        .iter()
        .map(|title| repo.insert(title, None).unwrap())
        .collect();

    assert_eq!(repo.list_all().unwrap(), inserted);
}

#[test]
fn corrupted_id_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO notes (id, title, content) VALUES ('not-a-uuid', 'broken', NULL);",
        [],
    )
    .unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn created_ids_are_unique_among_live_notes() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let mut seen = HashSet::new();
    for idx in 0..25 {
        let note = service.create_note(format!("note {idx}"), None).unwrap();
        assert!(seen.insert(note.id), "duplicate id {}", note.id);
    }
}

#[test]
fn delete_then_get_fails_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let created = service.create_note("to delete", None).unwrap();

    let ack = service.delete_note(created.id).unwrap();
    assert!(ack.success);

    let err = service.get_note(created.id).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(id) if id == created.id));
    let err = service.delete_note(created.id).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(_)));
}

#[test]
fn content_update_keeps_title_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let created = service
        .create_note("Test Note", Some("Hello!".to_string()))
        .unwrap();

    let patch = NotePatch::content("Updated content");
    let first = service.update_note(created.id, &patch).unwrap();
    let second = service.update_note(created.id, &patch).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.title, "Test Note");
    assert_eq!(second.content.as_deref(), Some("Updated content"));
    assert_eq!(service.get_note(created.id).unwrap(), second);
}

#[test]
fn update_can_clear_content() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let created = service
        .create_note("keeps title", Some("drop me".to_string()))
        .unwrap();

    let patch = NotePatch {
        title: None,
        content: Some(None),
    };
    let updated = service.update_note(created.id, &patch).unwrap();

    assert_eq!(updated.title, "keeps title");
    assert_eq!(updated.content, None);
    assert_eq!(service.get_note(created.id).unwrap().content, None);
}

#[test]
fn list_after_creates_and_deletes_reflects_last_written_values() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let created: Vec<Note> = (0..6)
        .map(|idx| service.create_note(format!("note {idx}"), None).unwrap())
        .collect();
    service.delete_note(created[1].id).unwrap();
    service.delete_note(created[4].id).unwrap();
    let renamed = service
        .update_note(created[2].id, &NotePatch::title("renamed"))
        .unwrap();

    let listed = service.list_notes().unwrap();
    assert_eq!(listed.len(), 4);
    assert!(listed.iter().all(|note| note.id != created[1].id && note.id != created[4].id));
    let stored = listed.iter().find(|note| note.id == renamed.id).unwrap();
    assert_eq!(stored.title, "renamed");
}
