//! Business logic services

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod documents;
pub mod email;
pub mod render;
pub mod reservations;
pub mod settings;
pub mod stats;

use crate::{
    config::{AuthConfig, EmailConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub clients: clients::ClientsService,
    pub catalog: catalog::CatalogService,
    pub reservations: reservations::ReservationsService,
    pub documents: documents::DocumentsService,
    pub settings: settings::SettingsService,
    pub stats: stats::StatsService,
    pub email: email::EmailService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, email_config: EmailConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            clients: clients::ClientsService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            documents: documents::DocumentsService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
            email: email::EmailService::new(email_config),
        }
    }
}
