//! Request and response bodies.

use notedesk_core::{Note, NotePatch};
use serde::{Deserialize, Deserializer, Serialize};

/// `POST /notes` body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    /// Optional at the serde level so a missing title maps to a 400 with a
    /// clear message instead of a generic decode error.
    pub title: Option<String>,
    pub content: Option<String>,
}

/// `PUT /notes/{id}` body.
///
/// `title: null` is treated like an absent title. `content: null` clears the
/// stored content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(value: UpdateNoteRequest) -> Self {
        Self {
            title: value.title,
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub items: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

// Marks a field that appeared in the payload, even as `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{CreateNoteRequest, UpdateNoteRequest};
    use notedesk_core::NotePatch;

    #[test]
    fn update_body_distinguishes_absent_and_null_content() {
        let absent: UpdateNoteRequest =
            serde_json::from_str(r#"{"title":"t"}"#).expect("title-only body should decode");
        assert_eq!(absent.content, None);

        let cleared: UpdateNoteRequest =
            serde_json::from_str(r#"{"content":null}"#).expect("null content should decode");
        assert_eq!(cleared.content, Some(None));

        let replaced: UpdateNoteRequest =
            serde_json::from_str(r#"{"content":"x"}"#).expect("content body should decode");
        let patch = NotePatch::from(replaced);
        assert_eq!(patch, NotePatch::content("x"));
    }

    #[test]
    fn create_body_ignores_unknown_fields() {
        let raw = r#"{"title":"a","id":"forged","extra":1}"#;
        let body: CreateNoteRequest =
            serde_json::from_str(raw).expect("extra fields should be ignored");
        assert_eq!(body.title.as_deref(), Some("a"));
        assert_eq!(body.content, None);
    }
}
