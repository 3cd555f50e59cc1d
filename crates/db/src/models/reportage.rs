//! Reportage entity model and DTOs.

use reportage_core::types::{Date, DbId, Time};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reportages` table.
///
/// Both foreign keys are validated against their parent tables before any
/// insert or update; the ON DELETE CASCADE constraints are a backstop, not
/// the primary check.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reportage {
    pub id: DbId,
    pub date: Date,
    pub quality: String,
    pub time: Time,
    pub video: bool,
    pub event_id: DbId,
    pub correspondent_id: DbId,
}

/// DTO for creating a new reportage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportage {
    pub date: Date,
    pub quality: String,
    pub time: Time,
    pub video: bool,
    pub event_id: DbId,
    pub correspondent_id: DbId,
}

/// DTO for replace-updating a reportage.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReportage {
    pub date: Date,
    pub quality: String,
    pub time: Time,
    pub video: bool,
    pub event_id: DbId,
    pub correspondent_id: DbId,
}
