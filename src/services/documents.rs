//! Document composition and lifecycle service.
//!
//! Composing a quote or invoice consolidates one or several of a client's
//! reservations into a numbered, immutable snapshot. Totals are aggregated
//! here, with tax applied once over the combined subtotal; the numbered
//! insert itself happens atomically in the repository.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::client::Client,
    models::document::{
        ClientDetails, ComposeDocument, Document, DocumentLine, DocumentQuery, NewDocument,
    },
    models::enums::{DocumentStatus, DocumentType},
    models::payment::{CreatePayment, Payment},
    models::reservation::Reservation,
    pricing::{aggregate_totals, rental_days},
    repository::Repository,
};

/// Payment terms for invoices
const INVOICE_DUE_DAYS: i64 = 30;

#[derive(Clone)]
pub struct DocumentsService {
    repository: Repository,
}

impl DocumentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get document by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Document> {
        self.repository.documents.get_by_id(id).await
    }

    /// List documents
    pub async fn list(&self, query: &DocumentQuery) -> AppResult<(Vec<Document>, i64)> {
        self.repository.documents.list(query).await
    }

    /// Compose a quote or invoice from a client's reservations
    pub async fn compose(&self, req: ComposeDocument) -> AppResult<Document> {
        if req.reservation_ids.is_empty() {
            return Err(AppError::Validation(
                "At least one reservation must be selected".to_string(),
            ));
        }

        let client = self.repository.clients.get_by_id(req.client_id).await?;

        let mut ids = req.reservation_ids.clone();
        ids.sort();
        ids.dedup();

        let reservations = self
            .repository
            .reservations
            .get_for_client(req.client_id, &ids)
            .await?;
        if reservations.len() != ids.len() {
            return Err(AppError::Validation(
                "Some reservations do not exist or belong to another client".to_string(),
            ));
        }

        let settings = self.repository.settings.get().await?;
        let tax_rate = req.tax_rate.unwrap_or(settings.default_tax_rate);

        let mut lines = Vec::with_capacity(reservations.len());
        let mut subtotals = Vec::with_capacity(reservations.len());
        for res in &reservations {
            lines.push(DocumentLine {
                reservation_id: res.id,
                label: self.line_label(res).await?,
                start_date: res.start_date,
                end_date: res.end_date,
                days: rental_days(res.start_date, res.end_date)?,
                amount: res.subtotal,
            });
            subtotals.push(res.subtotal);
        }

        let (subtotal, tax_amount, total_amount) = aggregate_totals(&subtotals, tax_rate)?;

        let issue_date = Utc::now();
        let due_date = match req.doc_type {
            DocumentType::Invoice => Some(issue_date + Duration::days(INVOICE_DUE_DAYS)),
            DocumentType::Quote => None,
        };

        self.repository
            .documents
            .create(&NewDocument {
                doc_type: req.doc_type,
                issue_date,
                due_date,
                client_id: client.id,
                subtotal,
                tax_rate,
                tax_amount,
                total_amount,
                company_details: settings.to_details(),
                client_details: client_details(&client),
                lines,
                notes: req.notes,
            })
            .await
    }

    /// Human label for a billed line, e.g. "Toyota Yaris (123456 P) + Bungalow Tiare".
    /// A resource removed from the catalog since booking keeps a generic label.
    async fn line_label(&self, res: &Reservation) -> AppResult<String> {
        let mut parts = Vec::new();
        if let Some(vid) = res.vehicle_id {
            match self.repository.vehicles.get_by_id(vid).await {
                Ok(vehicle) => parts.push(vehicle.label()),
                Err(AppError::NotFound(_)) => parts.push("Location de véhicule".to_string()),
                Err(e) => return Err(e),
            }
        }
        if let Some(bid) = res.bungalow_id {
            match self.repository.bungalows.get_by_id(bid).await {
                Ok(bungalow) => parts.push(format!("Bungalow {}", bungalow.name)),
                Err(AppError::NotFound(_)) => parts.push("Location de bungalow".to_string()),
                Err(e) => return Err(e),
            }
        }
        if parts.is_empty() {
            parts.push("Location".to_string());
        }
        Ok(parts.join(" + "))
    }

    /// Apply a staff-triggered status transition
    pub async fn update_status(&self, id: Uuid, next: DocumentStatus) -> AppResult<Document> {
        let document = self.repository.documents.get_by_id(id).await?;

        if !document.status.can_transition_to(next) {
            return Err(AppError::BusinessRule(format!(
                "Document {} cannot go from {} to {}",
                document.number, document.status, next
            )));
        }

        self.repository.documents.update_status(id, next.as_str()).await
    }

    /// Record a payment against an invoice. When recorded payments cover
    /// the total, the invoice moves to paid.
    pub async fn record_payment(&self, document_id: Uuid, payment: CreatePayment) -> AppResult<Payment> {
        if payment.amount <= rust_decimal::Decimal::ZERO {
            return Err(AppError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }

        let document = self.repository.documents.get_by_id(document_id).await?;
        if document.doc_type != DocumentType::Invoice {
            return Err(AppError::BusinessRule(
                "Payments can only be recorded against invoices".to_string(),
            ));
        }
        if document.status == DocumentStatus::Cancelled {
            return Err(AppError::BusinessRule(
                "Document is cancelled".to_string(),
            ));
        }
        if document.status == DocumentStatus::Draft {
            return Err(AppError::BusinessRule(format!(
                "Invoice {} has not been sent yet",
                document.number
            )));
        }

        let created = self
            .repository
            .documents
            .create_payment(document_id, &payment)
            .await?;

        let paid = self.repository.documents.payments_total(document_id).await?;
        if paid >= document.total_amount && document.status.can_transition_to(DocumentStatus::Paid) {
            self.repository
                .documents
                .update_status(document_id, DocumentStatus::Paid.as_str())
                .await?;
            tracing::info!(number = %document.number, "Invoice fully paid");
        }

        Ok(created)
    }

    /// List payments recorded against a document
    pub async fn list_payments(&self, document_id: Uuid) -> AppResult<Vec<Payment>> {
        self.repository.documents.get_by_id(document_id).await?;
        self.repository.documents.list_payments(document_id).await
    }
}

fn client_details(client: &Client) -> ClientDetails {
    let name = match &client.company {
        Some(company) => format!("{} ({} {})", company, client.first_name, client.last_name),
        None => format!("{} {}", client.first_name, client.last_name),
    };

    let mut address_parts = Vec::new();
    if let Some(a) = &client.address {
        address_parts.push(a.clone());
    }
    if let Some(c) = &client.address_complement {
        address_parts.push(c.clone());
    }
    let city_line: Vec<&str> = [client.postal_code.as_deref(), client.city.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !city_line.is_empty() {
        address_parts.push(city_line.join(" "));
    }
    if let Some(country) = &client.country {
        address_parts.push(country.clone());
    }

    ClientDetails {
        client_id: client.id,
        name,
        address: if address_parts.is_empty() {
            None
        } else {
            Some(address_parts.join("\n"))
        },
        phone: client.phone_mobile.clone().or_else(|| client.phone_home.clone()),
        email: client.email.clone(),
    }
}
