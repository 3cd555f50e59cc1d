//! Event entity model and DTOs.

use reportage_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// `extra_metadata` is the optional semi-structured attribute bag; search
/// endpoints query its serialized text form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub place: String,
    pub city: String,
    pub date: Date,
    pub duration: i32,
    pub danger: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub extra_metadata: Option<serde_json::Value>,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub place: String,
    pub city: String,
    pub date: Date,
    pub duration: i32,
    pub danger: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extra_metadata: Option<serde_json::Value>,
}

/// DTO for replace-updating an event. All mutable fields are required;
/// an update overwrites the full row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub place: String,
    pub city: String,
    pub date: Date,
    pub duration: i32,
    pub danger: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extra_metadata: Option<serde_json::Value>,
}
