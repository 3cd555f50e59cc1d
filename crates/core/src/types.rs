/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (no time zone) as stored in DATE columns.
pub type Date = chrono::NaiveDate;

/// Wall-clock times (no time zone) as stored in TIME columns.
pub type Time = chrono::NaiveTime;
