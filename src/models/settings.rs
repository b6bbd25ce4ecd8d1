//! Company settings model (single row)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::document::CompanyDetails;

/// Company settings from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompanySettings {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub company_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tax_number: Option<String>,
    pub logo_url: Option<String>,
    /// Free text appended at the bottom of rendered documents
    pub invoice_footer: Option<String>,
    /// Applied when a document does not override it
    pub default_tax_rate: Decimal,
}

impl CompanySettings {
    /// Value snapshot for a document's `company_details`
    pub fn to_details(&self) -> CompanyDetails {
        CompanyDetails {
            name: self.company_name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            tax_number: self.tax_number.clone(),
        }
    }
}

/// Update company settings request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanySettings {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub website: Option<String>,
    pub tax_number: Option<String>,
    pub logo_url: Option<String>,
    pub invoice_footer: Option<String>,
    pub default_tax_rate: Option<Decimal>,
}
