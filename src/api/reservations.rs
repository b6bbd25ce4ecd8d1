//! Reservation endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reservation::{
        CreateReservation, Reservation, ReservationQuery, UpdateReservation,
        UpdateReservationStatus,
    },
};

use super::{clients::PaginatedResponse, AuthenticatedStaff};

/// List reservations with filters
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(ReservationQuery),
    responses(
        (status = 200, description = "List of reservations", body = PaginatedResponse<Reservation>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<PaginatedResponse<Reservation>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (items, total) = state.services.reservations.list(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation", body = Reservation),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.reservations.get_by_id(id).await?;
    Ok(Json(reservation))
}

/// Create a reservation; amounts are computed server-side
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created with computed amounts", body = Reservation),
        (status = 400, description = "Invalid dates or no resource selected"),
        (status = 404, description = "Client, vehicle or bungalow not found")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.services.reservations.create(request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Update a reservation; amounts are recomputed when pricing inputs change
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    request_body = UpdateReservation,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Reservation already billed on a document")
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.reservations.update(id, request).await?;
    Ok(Json(reservation))
}

/// Update reservation status
#[utoipa::path(
    put,
    path = "/reservations/{id}/status",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    request_body = UpdateReservationStatus,
    responses(
        (status = 200, description = "Status updated", body = Reservation),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation_status(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservationStatus>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .services
        .reservations
        .update_status(id, request.status)
        .await?;
    Ok(Json(reservation))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Reservation already billed on a document")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.reservations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
