//! Billing document (quote/invoice) model and related types
//!
//! A document is an immutable, numbered snapshot: amounts and party
//! details are copied by value at composition time and never recomputed
//! from live reservation or client state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::{DocumentStatus, DocumentType};

/// Company block snapshotted onto each document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetails {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_number: Option<String>,
}

/// Client block snapshotted onto each document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDetails {
    pub client_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// One billed reservation line, frozen at composition time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentLine {
    pub reservation_id: Uuid,
    /// Resource label, e.g. "Toyota Yaris (123456 P)" or "Bungalow Tiare"
    pub label: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub days: i64,
    pub amount: Decimal,
}

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    doc_type: DocumentType,
    number: String,
    issue_date: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    status: String,
    client_id: Uuid,
    subtotal: Decimal,
    tax_rate: Decimal,
    tax_amount: Decimal,
    total_amount: Decimal,
    company_details: Json<CompanyDetails>,
    client_details: Json<ClientDetails>,
    lines: Json<Vec<DocumentLine>>,
    notes: Option<String>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            created_at: row.created_at,
            doc_type: row.doc_type,
            number: row.number,
            issue_date: row.issue_date,
            due_date: row.due_date,
            status: row.status.into(),
            client_id: row.client_id,
            subtotal: row.subtotal,
            tax_rate: row.tax_rate,
            tax_amount: row.tax_amount,
            total_amount: row.total_amount,
            company_details: row.company_details.0,
            client_details: row.client_details.0,
            lines: row.lines.0,
            notes: row.notes,
        }
    }
}

/// Document model from database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub doc_type: DocumentType,
    /// Sequential per (type, year), e.g. F2025-0003
    pub number: String,
    pub issue_date: DateTime<Utc>,
    /// Invoices only
    pub due_date: Option<DateTime<Utc>>,
    pub status: DocumentStatus,
    pub client_id: Uuid,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub company_details: CompanyDetails,
    pub client_details: ClientDetails,
    pub lines: Vec<DocumentLine>,
    pub notes: Option<String>,
}

/// Format a document number: `{D|F}{year}-{zero-padded sequence}`
pub fn format_number(doc_type: DocumentType, year: i32, seq: i32) -> String {
    format!("{}{}-{:04}", doc_type.prefix(), year, seq)
}

/// Fully composed document content, ready for numbering and insertion.
/// Everything except the sequential number is decided before the write.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub doc_type: DocumentType,
    pub issue_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub client_id: Uuid,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub company_details: CompanyDetails,
    pub client_details: ClientDetails,
    pub lines: Vec<DocumentLine>,
    pub notes: Option<String>,
}

/// Document query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DocumentQuery {
    pub doc_type: Option<DocumentType>,
    pub status: Option<DocumentStatus>,
    pub client_id: Option<Uuid>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Compose document request: one or several of the client's reservations
/// are consolidated onto a single quote or invoice.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ComposeDocument {
    pub doc_type: DocumentType,
    pub client_id: Uuid,
    /// Reservations included on the document; must not be empty
    pub reservation_ids: Vec<Uuid>,
    /// Overrides the company default tax rate when present
    pub tax_rate: Option<Decimal>,
    pub notes: Option<String>,
}

/// Update document status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDocumentStatus {
    pub status: DocumentStatus,
}

/// Send document by email request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SendDocument {
    /// Defaults to the snapshotted client email
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(DocumentType::Invoice, 2025, 3), "F2025-0003");
        assert_eq!(format_number(DocumentType::Quote, 2025, 1), "D2025-0001");
        assert_eq!(format_number(DocumentType::Invoice, 2026, 127), "F2026-0127");
        // Padding widens past 4 digits rather than truncating
        assert_eq!(format_number(DocumentType::Quote, 2025, 12345), "D2025-12345");
    }
}
