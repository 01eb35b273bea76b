//! The persisted note document.

use chrono::Local;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Timestamp layout for `time`, e.g. `2026/08/30 14:05:09`.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A note as stored in the collection.
///
/// Field names are the storage contract: `title`, `note`, and `time` must
/// round-trip unchanged through create→read and update→read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Store-assigned identifier. `None` until the insert returns.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub title: String,
    pub note: String,
    pub time: String,
}

impl NoteRecord {
    /// Build a record with a fresh local timestamp. The caller never
    /// supplies `time`; create and update both stamp it here.
    pub fn new(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            note: note.into(),
            time: Local::now().format(TIME_FORMAT).to_string(),
        }
    }
}
