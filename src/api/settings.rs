//! Company settings endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::settings::{CompanySettings, UpdateCompanySettings},
};

use super::AuthenticatedStaff;

/// Get the company settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Company settings", body = CompanySettings),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<CompanySettings>> {
    let settings = state.services.settings.get().await?;
    Ok(Json(settings))
}

/// Update the company settings (admin only)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = UpdateCompanySettings,
    responses(
        (status = 200, description = "Settings updated", body = CompanySettings),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(request): Json<UpdateCompanySettings>,
) -> AppResult<Json<CompanySettings>> {
    claims.require_admin()?;

    let settings = state.services.settings.update(request).await?;
    Ok(Json(settings))
}
