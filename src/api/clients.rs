//! Client management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::client::{Client, ClientQuery, CreateClient, UpdateClient},
};

use super::AuthenticatedStaff;

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// List clients with search and pagination
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    security(("bearer_auth" = [])),
    params(ClientQuery),
    responses(
        (status = 200, description = "List of clients", body = PaginatedResponse<Client>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_clients(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<ClientQuery>,
) -> AppResult<Json<PaginatedResponse<Client>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (items, total) = state.services.clients.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.get_by_id(id).await?;
    Ok(Json(client))
}

/// Create a new client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    security(("bearer_auth" = [])),
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.services.clients.create(request).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Client ID")),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = state.services.clients.update(id, request).await?;
    Ok(Json(client))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
