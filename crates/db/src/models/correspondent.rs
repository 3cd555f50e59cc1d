//! Correspondent entity model and DTOs.

use reportage_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `correspondents` table.
///
/// `operator` marks the correspondent as eligible for the bulk
/// price-adjustment operation. `price` maps to NUMERIC(10,2) and
/// serializes as a decimal string.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Correspondent {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub specification: String,
    pub operator: bool,
    pub price: Decimal,
}

/// DTO for creating a new correspondent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCorrespondent {
    pub name: String,
    pub country: String,
    pub city: String,
    pub specification: String,
    pub operator: bool,
    pub price: Decimal,
}

/// DTO for replace-updating a correspondent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCorrespondent {
    pub name: String,
    pub country: String,
    pub city: String,
    pub specification: String,
    pub operator: bool,
    pub price: Decimal,
}
