//! Raiatea Rental Server
//!
//! REST JSON API for a vehicle and bungalow rental business: clients,
//! fleet, reservations with server-side pricing, and numbered quote and
//! invoice documents.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
