use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    models::medication::{CreateMedicationRequest, Medication},
};

pub struct MedicationService;

impl MedicationService {
    /// Newest first.
    pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<Medication>> {
        let medications = sqlx::query_as::<_, Medication>(
            "SELECT * FROM medications WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(medications)
    }

    /// Ownership-scoped lookup; a foreign medication reads as absent.
    pub async fn find_owned(
        pool: &SqlitePool,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Medication>> {
        let medication = sqlx::query_as::<_, Medication>(
            "SELECT * FROM medications WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(medication)
    }

    /// An empty name/dosage or a zero frequency counts as missing.
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        req: &CreateMedicationRequest,
    ) -> Result<Medication> {
        let name = req.name.as_deref().filter(|s| !s.is_empty());
        let dosage = req.dosage.as_deref().filter(|s| !s.is_empty());
        let frequency = req.frequency.filter(|f| *f != 0);
        let (Some(name), Some(dosage), Some(frequency)) = (name, dosage, frequency) else {
            return Err(AppError::validation("Name, dosage, and frequency are required"));
        };

        let medication = sqlx::query_as::<_, Medication>(
            "INSERT INTO medications (user_id, name, dosage, frequency, instructions)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(user_id)
        .bind(name)
        .bind(dosage)
        .bind(frequency)
        .bind(req.instructions.as_deref().unwrap_or_default())
        .fetch_one(pool)
        .await?;
        Ok(medication)
    }

    /// Deletes only the caller's own row. "Absent" and "someone else's" are
    /// both reported as not found.
    ///
    /// Log rows for the medication are not removed.
    pub async fn delete(pool: &SqlitePool, user_id: i64, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM medications WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Medication not found"));
        }
        Ok(())
    }
}
