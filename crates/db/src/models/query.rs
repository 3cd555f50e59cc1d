//! Result rows and parameter types for the analytical query endpoints.

use reportage_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::event::Event;

/// One flattened row from the reportage × event × correspondent join.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportageDetails {
    pub reportage_id: DbId,
    pub reportage_date: Date,
    pub quality: String,
    pub event_place: String,
    pub event_city: String,
    pub correspondent_name: String,
    pub correspondent_spec: String,
}

/// Per-city aggregate over the full event set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CityStats {
    pub city: String,
    pub total_events: i64,
    /// Coerced to 0.0 when the partition average is undefined.
    pub avg_duration: f64,
    pub min_duration: i32,
    pub max_duration: i32,
}

/// Outcome of a bulk operator price increase.
#[derive(Debug, Clone, Serialize)]
pub struct PriceIncreaseResult {
    pub updated_count: u64,
    pub percentage_increase: f64,
    pub multiplier: f64,
}

/// One page of metadata search results with the total match count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<Event>,
}

/// Whitelisted sort keys for the sorted-events endpoint.
///
/// Unrecognized input falls back to [`SortKey::Date`]; the mapped column
/// name is a static string so raw user input never reaches the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Duration,
    City,
}

impl SortKey {
    pub fn parse(s: &str) -> Self {
        match s {
            "duration" => Self::Duration,
            "city" => Self::City,
            _ => Self::Date,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Duration => "duration",
            Self::City => "city",
        }
    }
}

/// Sort direction; unrecognized input defaults to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_falls_back_to_date() {
        assert_eq!(SortKey::parse("danger"), SortKey::Date);
        assert_eq!(SortKey::parse(""), SortKey::Date);
        assert_eq!(SortKey::parse("city"), SortKey::City);
    }

    #[test]
    fn unknown_order_defaults_to_desc() {
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
    }
}
