use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One "taken" event; unique per (medication_id, taken_date).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MedicationLog {
    pub id: i64,
    pub medication_id: i64,
    pub taken_date: NaiveDate,
    pub taken_time: NaiveDateTime,
    pub notes: Option<String>,
}

/// `taken_date` is parsed by the service so a bad date is a 400, not a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LogTakenRequest {
    pub taken_date: Option<String>,
    pub notes: Option<String>,
}
