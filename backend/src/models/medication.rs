use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Medication {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: i64, // doses per day
    pub instructions: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateMedicationRequest {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<i64>,
    pub instructions: Option<String>,
}
