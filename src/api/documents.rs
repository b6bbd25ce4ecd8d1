//! Quote and invoice endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::document::{ComposeDocument, Document, DocumentQuery, SendDocument, UpdateDocumentStatus},
    models::payment::{CreatePayment, Payment},
    services::render::render_document,
};

use super::{clients::PaginatedResponse, AuthenticatedStaff};

/// List documents
#[utoipa::path(
    get,
    path = "/documents",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(DocumentQuery),
    responses(
        (status = 200, description = "List of documents", body = PaginatedResponse<Document>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_documents(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<DocumentQuery>,
) -> AppResult<Json<PaginatedResponse<Document>>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);

    let (items, total) = state.services.documents.list(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get a document by ID
#[utoipa::path(
    get,
    path = "/documents/{id}",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document", body = Document),
        (status = 404, description = "Document not found")
    )
)]
pub async fn get_document(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Document>> {
    let document = state.services.documents.get_by_id(id).await?;
    Ok(Json(document))
}

/// Compose a quote or invoice from a client's reservations
#[utoipa::path(
    post,
    path = "/documents",
    tag = "documents",
    security(("bearer_auth" = [])),
    request_body = ComposeDocument,
    responses(
        (status = 201, description = "Document composed and numbered", body = Document),
        (status = 400, description = "Empty selection or foreign reservations"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Number allocation failed")
    )
)]
pub async fn compose_document(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<ComposeDocument>,
) -> AppResult<(StatusCode, Json<Document>)> {
    let document = state.services.documents.compose(request).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// Update document status
#[utoipa::path(
    put,
    path = "/documents/{id}/status",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = UpdateDocumentStatus,
    responses(
        (status = 200, description = "Status updated", body = Document),
        (status = 404, description = "Document not found"),
        (status = 422, description = "Transition not allowed")
    )
)]
pub async fn update_document_status(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDocumentStatus>,
) -> AppResult<Json<Document>> {
    let document = state
        .services
        .documents
        .update_status(id, request.status)
        .await?;
    Ok(Json(document))
}

/// Render a document as printable HTML
#[utoipa::path(
    get,
    path = "/documents/{id}/render",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Rendered HTML", content_type = "text/html"),
        (status = 404, description = "Document not found")
    )
)]
pub async fn render_document_html(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let document = state.services.documents.get_by_id(id).await?;
    let settings = state.services.settings.get().await?;

    let html = render_document(&document, settings.invoice_footer.as_deref());

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}.html\"", document.number),
        )],
        Html(html),
    ))
}

/// Send a document to the client by email
#[utoipa::path(
    post,
    path = "/documents/{id}/send",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = SendDocument,
    responses(
        (status = 200, description = "Document sent", body = Document),
        (status = 400, description = "No recipient email available"),
        (status = 404, description = "Document not found"),
        (status = 422, description = "Document is cancelled")
    )
)]
pub async fn send_document(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<SendDocument>,
) -> AppResult<Json<Document>> {
    let document = state.services.documents.get_by_id(id).await?;

    if document.status == crate::models::enums::DocumentStatus::Cancelled {
        return Err(AppError::BusinessRule(format!(
            "Document {} is cancelled and cannot be sent",
            document.number
        )));
    }

    let to = request
        .to
        .or_else(|| document.client_details.email.clone())
        .ok_or_else(|| {
            AppError::Validation("Client has no email address on file".to_string())
        })?;

    let settings = state.services.settings.get().await?;
    let html = render_document(&document, settings.invoice_footer.as_deref());

    state.services.email.send_document(&to, &document, &html).await?;

    // Draft documents become sent; resending a sent document is a no-op
    let document = if document.status == crate::models::enums::DocumentStatus::Draft {
        state
            .services
            .documents
            .update_status(id, crate::models::enums::DocumentStatus::Sent)
            .await?
    } else {
        document
    };

    Ok(Json(document))
}

/// Record a payment against an invoice
#[utoipa::path(
    post,
    path = "/documents/{id}/payments",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = CreatePayment,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 404, description = "Document not found"),
        (status = 422, description = "Not an invoice, still a draft, or cancelled")
    )
)]
pub async fn record_payment(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = state.services.documents.record_payment(id, request).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// List payments recorded against a document
#[utoipa::path(
    get,
    path = "/documents/{id}/payments",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Payments", body = Vec<Payment>),
        (status = 404, description = "Document not found")
    )
)]
pub async fn list_payments(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = state.services.documents.list_payments(id).await?;
    Ok(Json(payments))
}
