//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::DashboardStats};

use super::AuthenticatedStaff;

/// Get the dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}
