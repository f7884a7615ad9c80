use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::Result,
    middleware::extract::ApiJson,
    models::user::{AuthResponse, LoginRequest, RegisterRequest},
    services::auth::AuthService,
    AppState,
};

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let response = AuthService::register(
        &state.db,
        &body,
        &state.config.jwt_secret,
        state.config.jwt_expiry_days,
        state.config.bcrypt_cost,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    AuthService::login(
        &state.db,
        &body,
        &state.config.jwt_secret,
        state.config.jwt_expiry_days,
    )
    .await
    .map(Json)
}
