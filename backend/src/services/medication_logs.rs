use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    models::medication_log::{LogTakenRequest, MedicationLog},
    services::medications::MedicationService,
};

/// Parses the `YYYY-MM-DD` calendar day a dose was taken on.
pub fn parse_taken_date(raw: Option<&str>) -> Result<NaiveDate> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("Taken date is required"))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Taken date must be a YYYY-MM-DD date"))
}

pub struct MedicationLogService;

impl MedicationLogService {
    /// Newest date first. A medication the user doesn't own yields no rows.
    pub async fn list_for_medication(
        pool: &SqlitePool,
        user_id: i64,
        medication_id: i64,
    ) -> Result<Vec<MedicationLog>> {
        let logs = sqlx::query_as::<_, MedicationLog>(
            "SELECT ml.* FROM medication_logs ml
             JOIN medications m ON ml.medication_id = m.id
             WHERE m.id = ? AND m.user_id = ?
             ORDER BY ml.taken_date DESC",
        )
        .bind(medication_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(logs)
    }

    /// Record a dose for `taken_date`. A second call for the same day
    /// replaces the earlier row (fresh id, notes and timestamp).
    pub async fn log_taken(
        pool: &SqlitePool,
        user_id: i64,
        medication_id: i64,
        req: &LogTakenRequest,
    ) -> Result<MedicationLog> {
        let taken_date = parse_taken_date(req.taken_date.as_deref())?;

        MedicationService::find_owned(pool, user_id, medication_id)
            .await?
            .ok_or_else(|| AppError::not_found("Medication not found"))?;

        let log = sqlx::query_as::<_, MedicationLog>(
            "INSERT OR REPLACE INTO medication_logs (medication_id, taken_date, notes)
             VALUES (?, ?, ?)
             RETURNING *",
        )
        .bind(medication_id)
        .bind(taken_date)
        .bind(req.notes.as_deref().unwrap_or_default())
        .fetch_one(pool)
        .await?;
        Ok(log)
    }
}
