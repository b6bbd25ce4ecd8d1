//! Bungalow endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::bungalow::{Bungalow, BungalowQuery, CreateBungalow, UpdateBungalow},
};

use super::{clients::PaginatedResponse, AuthenticatedStaff};

/// List bungalows
#[utoipa::path(
    get,
    path = "/bungalows",
    tag = "bungalows",
    security(("bearer_auth" = [])),
    params(BungalowQuery),
    responses(
        (status = 200, description = "List of bungalows", body = PaginatedResponse<Bungalow>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bungalows(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<BungalowQuery>,
) -> AppResult<Json<PaginatedResponse<Bungalow>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (items, total) = state.services.catalog.list_bungalows(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get a bungalow by ID
#[utoipa::path(
    get,
    path = "/bungalows/{id}",
    tag = "bungalows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bungalow ID")),
    responses(
        (status = 200, description = "Bungalow", body = Bungalow),
        (status = 404, description = "Bungalow not found")
    )
)]
pub async fn get_bungalow(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Bungalow>> {
    let bungalow = state.services.catalog.get_bungalow(id).await?;
    Ok(Json(bungalow))
}

/// Add a bungalow
#[utoipa::path(
    post,
    path = "/bungalows",
    tag = "bungalows",
    security(("bearer_auth" = [])),
    request_body = CreateBungalow,
    responses(
        (status = 201, description = "Bungalow created", body = Bungalow),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_bungalow(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateBungalow>,
) -> AppResult<(StatusCode, Json<Bungalow>)> {
    let bungalow = state.services.catalog.create_bungalow(request).await?;
    Ok((StatusCode::CREATED, Json(bungalow)))
}

/// Update a bungalow
#[utoipa::path(
    put,
    path = "/bungalows/{id}",
    tag = "bungalows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bungalow ID")),
    request_body = UpdateBungalow,
    responses(
        (status = 200, description = "Bungalow updated", body = Bungalow),
        (status = 404, description = "Bungalow not found")
    )
)]
pub async fn update_bungalow(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBungalow>,
) -> AppResult<Json<Bungalow>> {
    let bungalow = state.services.catalog.update_bungalow(id, request).await?;
    Ok(Json(bungalow))
}

/// Remove a bungalow
#[utoipa::path(
    delete,
    path = "/bungalows/{id}",
    tag = "bungalows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bungalow ID")),
    responses(
        (status = 204, description = "Bungalow deleted"),
        (status = 404, description = "Bungalow not found")
    )
)]
pub async fn delete_bungalow(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_bungalow(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
