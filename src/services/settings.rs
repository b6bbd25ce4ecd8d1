//! Company settings service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::settings::{CompanySettings, UpdateCompanySettings},
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the company settings
    pub async fn get(&self) -> AppResult<CompanySettings> {
        self.repository.settings.get().await
    }

    /// Update the company settings (admin only, enforced at the API layer)
    pub async fn update(&self, update: UpdateCompanySettings) -> AppResult<CompanySettings> {
        update
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(rate) = update.default_tax_rate {
            if rate < rust_decimal::Decimal::ZERO || rate > rust_decimal::Decimal::from(100) {
                return Err(AppError::Validation(
                    "Default tax rate must be between 0 and 100".to_string(),
                ));
            }
        }

        self.repository.settings.update(&update).await
    }
}
