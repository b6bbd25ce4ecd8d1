//! Vehicle fleet endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery},
};

use super::{clients::PaginatedResponse, AuthenticatedStaff};

/// List vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(VehicleQuery),
    responses(
        (status = 200, description = "List of vehicles", body = PaginatedResponse<Vehicle>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_vehicles(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<VehicleQuery>,
) -> AppResult<Json<PaginatedResponse<Vehicle>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (items, total) = state.services.catalog.list_vehicles(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = state.services.catalog.get_vehicle(id).await?;
    Ok(Json(vehicle))
}

/// Add a vehicle to the fleet
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    request_body = CreateVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let vehicle = state.services.catalog.create_vehicle(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Update a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    request_body = UpdateVehicle,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn update_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = state.services.catalog.update_vehicle(id, request).await?;
    Ok(Json(vehicle))
}

/// Remove a vehicle from the fleet
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = "vehicles",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
