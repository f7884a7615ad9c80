use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    error::Result,
    middleware::extract::{ApiJson, ApiPath},
    models::{
        auth::AuthenticatedUser,
        medication::{CreateMedicationRequest, Medication},
        medication_log::{LogTakenRequest, MedicationLog},
    },
    services::{medication_logs::MedicationLogService, medications::MedicationService},
    AppState,
};

pub async fn list_medications(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Medication>>> {
    MedicationService::list(&state.db, user.user_id)
        .await
        .map(Json)
}

pub async fn create_medication(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(body): ApiJson<CreateMedicationRequest>,
) -> Result<(StatusCode, Json<Medication>)> {
    let medication = MedicationService::create(&state.db, user.user_id, &body).await?;
    tracing::info!(user_id = user.user_id, medication_id = medication.id, "medication created");
    Ok((StatusCode::CREATED, Json(medication)))
}

pub async fn delete_medication(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>> {
    MedicationService::delete(&state.db, user.user_id, id).await?;
    tracing::info!(user_id = user.user_id, medication_id = id, "medication deleted");
    Ok(Json(json!({ "message": "Medication deleted successfully" })))
}

pub async fn list_logs(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<MedicationLog>>> {
    MedicationLogService::list_for_medication(&state.db, user.user_id, id)
        .await
        .map(Json)
}

pub async fn log_taken(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<LogTakenRequest>,
) -> Result<(StatusCode, Json<MedicationLog>)> {
    let log = MedicationLogService::log_taken(&state.db, user.user_id, id, &body).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
