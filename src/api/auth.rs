//! Authentication endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::staff::{LoginRequest, LoginResponse, Staff},
};

use super::AuthenticatedStaff;

/// Log in with staff credentials
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state
        .services
        .auth
        .authenticate(&request.login, &request.password)
        .await?;
    Ok(Json(response))
}

/// Get the authenticated staff account
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current staff account", body = Staff),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
) -> AppResult<Json<Staff>> {
    let staff = state.services.auth.get_by_id(claims.staff_id).await?;
    Ok(Json(staff))
}
