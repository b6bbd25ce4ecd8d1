//! Reservation management service.
//!
//! Owns the write path around the pricing engine: rates are resolved
//! (catalog on attach, stored snapshot afterwards), amounts recomputed on
//! every create and on every update that touches a pricing input, and the
//! whole repriced state saved in one statement.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::ReservationStatus,
    models::reservation::{
        CreateReservation, Reservation, ReservationQuery, UpdateReservation,
    },
    pricing::{compute_amounts, PricingInputs},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Reservation> {
        self.repository.reservations.get_by_id(id).await
    }

    /// List reservations
    pub async fn list(&self, query: &ReservationQuery) -> AppResult<(Vec<Reservation>, i64)> {
        self.repository.reservations.list(query).await
    }

    /// Create a reservation: amounts come from the pricing engine, never
    /// from the caller.
    pub async fn create(&self, mut res: CreateReservation) -> AppResult<Reservation> {
        // Verify client exists
        self.repository.clients.get_by_id(res.client_id).await?;

        if res.vehicle_id.is_none() && res.bungalow_id.is_none() {
            return Err(AppError::Validation(
                "At least one vehicle or bungalow must be selected".to_string(),
            ));
        }

        // Catalog rates are captured once here; they become the
        // reservation's snapshot
        let vehicle_rate = match res.vehicle_id {
            Some(id) => Some(self.repository.vehicles.get_by_id(id).await?.daily_rate),
            None => None,
        };
        let bungalow_rate = match res.bungalow_id {
            Some(id) => Some(self.repository.bungalows.get_by_id(id).await?.daily_rate),
            None => None,
        };

        if res.tax_rate.is_none() {
            let settings = self.repository.settings.get().await?;
            res.tax_rate = Some(settings.default_tax_rate);
        }

        let amounts = compute_amounts(&PricingInputs {
            start_date: res.start_date,
            end_date: res.end_date,
            vehicle_rate,
            bungalow_rate,
            tax_rate: res.tax_rate.unwrap_or(Decimal::ZERO),
            commission_rate: res.commission_rate.unwrap_or(Decimal::ZERO),
        })?;

        self.repository
            .reservations
            .create(&res, vehicle_rate, bungalow_rate, &amounts)
            .await
    }

    /// Update a reservation. The patch is merged into the stored state and
    /// amounts recomputed when any pricing input changed.
    pub async fn update(&self, id: Uuid, update: UpdateReservation) -> AppResult<Reservation> {
        let mut res = self.repository.reservations.get_by_id(id).await?;

        let touches_pricing = update.start_date.is_some()
            || update.end_date.is_some()
            || update.vehicle_id.is_some()
            || update.bungalow_id.is_some()
            || update.tax_rate.is_some()
            || update.commission_rate.is_some();

        // Amounts already captured on a document are frozen there; the
        // reservation itself must not be repriced either once billed.
        if touches_pricing && self.repository.documents.exists_for_reservation(id).await? {
            return Err(AppError::BusinessRule(
                "Reservation is billed on a document and can no longer be repriced".to_string(),
            ));
        }

        if let Some(client_id) = update.client_id {
            self.repository.clients.get_by_id(client_id).await?;
            res.client_id = client_id;
        }

        // Resource patches: a changed id re-reads the catalog rate, an
        // explicit null detaches, absence keeps the stored snapshot
        if let Some(vehicle_id) = update.vehicle_id {
            res.vehicle_id = vehicle_id;
            res.vehicle_daily_rate = match vehicle_id {
                Some(vid) => Some(self.repository.vehicles.get_by_id(vid).await?.daily_rate),
                None => None,
            };
        }
        if let Some(bungalow_id) = update.bungalow_id {
            res.bungalow_id = bungalow_id;
            res.bungalow_daily_rate = match bungalow_id {
                Some(bid) => Some(self.repository.bungalows.get_by_id(bid).await?.daily_rate),
                None => None,
            };
        }

        if res.vehicle_id.is_none() && res.bungalow_id.is_none() {
            return Err(AppError::Validation(
                "At least one vehicle or bungalow must be selected".to_string(),
            ));
        }

        if let Some(start_date) = update.start_date {
            res.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            res.end_date = end_date;
        }
        if let Some(tax_rate) = update.tax_rate {
            res.tax_rate = tax_rate;
        }
        if let Some(commission_rate) = update.commission_rate {
            res.commission_rate = commission_rate;
        }
        if let Some(commission_type) = update.commission_type {
            res.commission_type = commission_type;
        }
        if let Some(check_in_time) = update.check_in_time {
            res.check_in_time = Some(check_in_time);
        }
        if let Some(check_out_time) = update.check_out_time {
            res.check_out_time = Some(check_out_time);
        }
        if let Some(source) = update.source {
            res.source = Some(source);
        }
        if let Some(file_number) = update.file_number {
            res.file_number = Some(file_number);
        }
        if let Some(is_simulation) = update.is_simulation {
            res.is_simulation = is_simulation;
        }
        if let Some(adults) = update.adults {
            res.adults = Some(adults);
        }
        if let Some(children) = update.children {
            res.children = Some(children);
        }
        if let Some(deposit_amount) = update.deposit_amount {
            res.deposit_amount = Some(deposit_amount);
        }
        if let Some(notes) = update.notes {
            res.notes = Some(notes);
        }

        let amounts = compute_amounts(&PricingInputs {
            start_date: res.start_date,
            end_date: res.end_date,
            vehicle_rate: res.vehicle_daily_rate,
            bungalow_rate: res.bungalow_daily_rate,
            tax_rate: res.tax_rate,
            commission_rate: res.commission_rate,
        })?;

        res.rate_per_night = Some(amounts.rate_per_night);
        res.subtotal = amounts.subtotal;
        res.tax_amount = amounts.tax_amount;
        res.commission_amount = amounts.commission_amount;
        res.total_amount = amounts.total_amount;

        self.repository.reservations.update(&res).await
    }

    /// Update reservation status (staff decision, no forced transitions)
    pub async fn update_status(&self, id: Uuid, status: ReservationStatus) -> AppResult<Reservation> {
        self.repository.reservations.get_by_id(id).await?;
        self.repository
            .reservations
            .update_status(id, status.as_str())
            .await
    }

    /// Delete a reservation, unless a document references it
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repository.documents.exists_for_reservation(id).await? {
            return Err(AppError::BusinessRule(
                "Reservation is billed on a document and cannot be deleted".to_string(),
            ));
        }
        self.repository.reservations.delete(id).await
    }

    /// Count confirmed reservations, for the dashboard
    pub async fn count_active(&self) -> AppResult<i64> {
        self.repository
            .reservations
            .count_by_status(ReservationStatus::Confirmed.as_str())
            .await
    }
}
