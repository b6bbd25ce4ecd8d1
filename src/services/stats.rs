//! Dashboard statistics service

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::enums::{BungalowStatus, DocumentType, ReservationStatus, VehicleStatus},
    repository::Repository,
};

/// Dashboard statistics snapshot
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub clients: i64,
    pub vehicles_available: i64,
    pub bungalows_available: i64,
    pub reservations_pending: i64,
    pub reservations_confirmed: i64,
    pub quotes_this_year: i64,
    pub invoices_this_year: i64,
    /// Sum of paid invoices issued this year
    pub revenue_this_year: Decimal,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Collect the dashboard counters
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let year = Utc::now().year();

        Ok(DashboardStats {
            clients: self.repository.clients.count().await?,
            vehicles_available: self
                .repository
                .vehicles
                .count_by_status(VehicleStatus::Available.as_str())
                .await?,
            bungalows_available: self
                .repository
                .bungalows
                .count_by_status(BungalowStatus::Available.as_str())
                .await?,
            reservations_pending: self
                .repository
                .reservations
                .count_by_status(ReservationStatus::Pending.as_str())
                .await?,
            reservations_confirmed: self
                .repository
                .reservations
                .count_by_status(ReservationStatus::Confirmed.as_str())
                .await?,
            quotes_this_year: self
                .repository
                .documents
                .count_for_year(DocumentType::Quote.as_str(), year)
                .await?,
            invoices_this_year: self
                .repository
                .documents
                .count_for_year(DocumentType::Invoice.as_str(), year)
                .await?,
            revenue_this_year: self.repository.documents.revenue_for_year(year).await?,
        })
    }
}
