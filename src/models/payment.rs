//! Payment record model (payments are recorded, never processed)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::PaymentMethod;

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct PaymentRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    document_id: Uuid,
    amount: Decimal,
    payment_date: DateTime<Utc>,
    payment_method: String,
    reference_number: Option<String>,
    notes: Option<String>,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Payment {
            id: row.id,
            created_at: row.created_at,
            document_id: row.document_id,
            amount: row.amount,
            payment_date: row.payment_date,
            payment_method: row.payment_method.into(),
            reference_number: row.reference_number,
            notes: row.notes,
        }
    }
}

/// Payment recorded against an invoice
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document_id: Uuid,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

/// Record payment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePayment {
    pub amount: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_method: PaymentMethod,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}
