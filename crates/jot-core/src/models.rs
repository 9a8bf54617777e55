//! Core data models for jot.
//!
//! These types are shared across all jot crates and represent the
//! note-taking domain entities and their externally visible projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// Lifecycle status of a note.
///
/// Notes are created Active; the archive workflow moves them between
/// Active and Archived. Archiving is idempotent, unarchiving requires
/// the note to currently be Archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    Active,
    Archived,
}

impl NoteStatus {
    /// Storage representation, matching the `note.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Active => "active",
            NoteStatus::Archived => "archived",
        }
    }

    /// Parse the storage representation. Unknown values are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(NoteStatus::Active),
            "archived" => Some(NoteStatus::Archived),
            _ => None,
        }
    }
}

/// The externally visible projection of a note.
///
/// The stored record additionally carries `owner_id` (assigned at creation
/// from the authenticated identity, immutable) and `status`; neither is
/// ever serialized to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

/// Request for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: Option<String>,
    pub text: String,
    pub tags: Vec<String>,
}

/// Request for updating a note's text and tag set.
///
/// The tag set is replaced wholesale: tags absent from `tags` are detached
/// from the note but never deleted from the tag store.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub text: String,
    pub tags: Vec<String>,
}

// =============================================================================
// TAG TYPES
// =============================================================================

/// A tag record.
///
/// Names are stored normalized (trimmed, lower-cased) and are globally
/// unique case-insensitively. Tags are shared across all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_view(title: Option<&str>) -> NoteView {
        NoteView {
            id: 7,
            title: title.map(String::from),
            text: "hello".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            created_on: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            modified_on: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 6).unwrap(),
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [NoteStatus::Active, NoteStatus::Archived] {
            assert_eq!(NoteStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(NoteStatus::parse("deleted"), None);
    }

    #[test]
    fn test_note_view_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_view(Some("t"))).unwrap();
        assert!(json.get("createdOn").is_some());
        assert!(json.get("modifiedOn").is_some());
        assert!(json.get("created_on").is_none());
        assert_eq!(json["title"], "t");
        assert_eq!(json["text"], "hello");
    }

    #[test]
    fn test_note_view_omits_null_title() {
        let json = serde_json::to_value(sample_view(None)).unwrap();
        assert!(json.get("title").is_none());
    }

    #[test]
    fn test_note_view_never_exposes_owner_or_status() {
        let json = serde_json::to_value(sample_view(None)).unwrap();
        assert!(json.get("ownerId").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_tag_serializes_id_and_name() {
        let tag = Tag {
            id: 3,
            name: "work".to_string(),
        };
        let json = serde_json::to_value(tag).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "work"}));
    }
}
