use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::{error::Result, models::stats::DashboardStats};

/// Length of the trailing adherence window, today included.
pub const ADHERENCE_WINDOW_DAYS: i64 = 30;

/// Percentage of `taken` over `expected`, rounded half up. Zero when nothing
/// was expected.
pub fn adherence_rate(taken: i64, expected: i64) -> i64 {
    if expected <= 0 {
        return 0;
    }
    (taken * 200 + expected) / (2 * expected)
}

pub struct StatsService;

impl StatsService {
    /// Dashboard summary as of `today`.
    ///
    /// Every medication is expected once per day for the whole window, even
    /// one created part-way through it. Logs of deleted medications are not
    /// counted.
    pub async fn compute(
        pool: &SqlitePool,
        user_id: i64,
        today: NaiveDate,
    ) -> Result<DashboardStats> {
        let total_medications: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM medications WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let taken_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM medication_logs ml
             JOIN medications m ON ml.medication_id = m.id
             WHERE m.user_id = ? AND ml.taken_date = ?",
        )
        .bind(user_id)
        .bind(today)
        .fetch_one(pool)
        .await?;

        let window_start = today - Duration::days(ADHERENCE_WINDOW_DAYS - 1);
        let taken_in_window: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM (
                 SELECT DISTINCT ml.medication_id, ml.taken_date
                 FROM medication_logs ml
                 JOIN medications m ON ml.medication_id = m.id
                 WHERE m.user_id = ? AND ml.taken_date BETWEEN ? AND ?
             )",
        )
        .bind(user_id)
        .bind(window_start)
        .bind(today)
        .fetch_one(pool)
        .await?;

        let expected = total_medications * ADHERENCE_WINDOW_DAYS;

        Ok(DashboardStats {
            total_medications,
            taken_today,
            adherence_rate: adherence_rate(taken_in_window, expected),
            // TODO: derive from consecutive fully-logged days once the
            // dashboard defines what counts as a complete day.
            streak: 0,
        })
    }
}
