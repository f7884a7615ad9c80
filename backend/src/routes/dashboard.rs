use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::Result,
    models::{auth::AuthenticatedUser, stats::DashboardStats},
    services::stats::StatsService,
    AppState,
};

/// "Today" is the current UTC calendar day.
pub async fn stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<DashboardStats>> {
    let today = Utc::now().date_naive();
    StatsService::compute(&state.db, user.user_id, today)
        .await
        .map(Json)
}
