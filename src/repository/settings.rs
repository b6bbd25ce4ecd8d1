//! Company settings repository (single-row table)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::settings::{CompanySettings, UpdateCompanySettings},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the company settings row, seeded by the migrations
    pub async fn get(&self) -> AppResult<CompanySettings> {
        sqlx::query_as::<_, CompanySettings>("SELECT * FROM company_settings LIMIT 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::Internal("Company settings row is missing".to_string()))
    }

    /// Patch the company settings row
    pub async fn update(&self, update: &UpdateCompanySettings) -> AppResult<CompanySettings> {
        sqlx::query_as::<_, CompanySettings>(
            r#"
            UPDATE company_settings SET
                company_name = COALESCE($1, company_name),
                address = COALESCE($2, address),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                website = COALESCE($5, website),
                tax_number = COALESCE($6, tax_number),
                logo_url = COALESCE($7, logo_url),
                invoice_footer = COALESCE($8, invoice_footer),
                default_tax_rate = COALESCE($9, default_tax_rate),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&update.company_name)
        .bind(&update.address)
        .bind(&update.phone)
        .bind(&update.email)
        .bind(&update.website)
        .bind(&update.tax_number)
        .bind(&update.logo_url)
        .bind(&update.invoice_footer)
        .bind(update.default_tax_rate)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Internal("Company settings row is missing".to_string()))
    }
}
