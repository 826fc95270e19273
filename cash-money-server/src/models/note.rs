//! The `note` entity and procedure inputs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored note. `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i32,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape of the `note` table. `created_at` is a timezone-naive
/// `TIMESTAMP` column and is read as UTC.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct NoteRow {
    pub id: i32,
    pub note: String,
    pub created_at: NaiveDateTime,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            note: row.note,
            created_at: row.created_at.and_utc(),
        }
    }
}

/// Input of `notes.create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNote {
    pub note: String,
}

/// Input of `notes.remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveNote {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn note_serializes_camel_case() {
        let created_at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let note = Note::from(NoteRow {
            id: 1,
            note: "buy milk".into(),
            created_at,
        });

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "note": "buy milk",
                "createdAt": "2024-05-01T12:30:00Z"
            })
        );
    }

    #[test]
    fn create_input_requires_string_note() {
        assert!(serde_json::from_value::<CreateNote>(json!({ "note": "x" })).is_ok());
        assert!(serde_json::from_value::<CreateNote>(json!({ "note": 5 })).is_err());
        assert!(serde_json::from_value::<CreateNote>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateNote>(json!({ "note": null })).is_err());
    }

    #[test]
    fn create_input_ignores_extra_fields() {
        let input: CreateNote =
            serde_json::from_value(json!({ "note": "x", "pinned": true })).unwrap();
        assert_eq!(input.note, "x");
    }

    #[test]
    fn remove_input_requires_integer_id() {
        assert_eq!(
            serde_json::from_value::<RemoveNote>(json!({ "id": 7 })).unwrap(),
            RemoveNote { id: 7 }
        );
        assert!(serde_json::from_value::<RemoveNote>(json!({ "id": "7" })).is_err());
        assert!(serde_json::from_value::<RemoveNote>(json!({ "id": 1.5 })).is_err());
        assert!(serde_json::from_value::<RemoveNote>(json!({ "id": 4294967296u64 })).is_err());
    }
}
