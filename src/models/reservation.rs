//! Reservation model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::{CommissionType, ReservationStatus};

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    client_id: Uuid,
    vehicle_id: Option<Uuid>,
    bungalow_id: Option<Uuid>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    check_in_time: Option<String>,
    check_out_time: Option<String>,
    status: String,
    source: Option<String>,
    file_number: Option<String>,
    is_simulation: bool,
    adults: Option<i32>,
    children: Option<i32>,
    vehicle_daily_rate: Option<Decimal>,
    bungalow_daily_rate: Option<Decimal>,
    tax_rate: Decimal,
    commission_rate: Decimal,
    commission_type: String,
    rate_per_night: Option<Decimal>,
    subtotal: Decimal,
    tax_amount: Decimal,
    commission_amount: Decimal,
    total_amount: Decimal,
    deposit_amount: Option<Decimal>,
    notes: Option<String>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            client_id: row.client_id,
            vehicle_id: row.vehicle_id,
            bungalow_id: row.bungalow_id,
            start_date: row.start_date,
            end_date: row.end_date,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            status: row.status.into(),
            source: row.source,
            file_number: row.file_number,
            is_simulation: row.is_simulation,
            adults: row.adults,
            children: row.children,
            vehicle_daily_rate: row.vehicle_daily_rate,
            bungalow_daily_rate: row.bungalow_daily_rate,
            tax_rate: row.tax_rate,
            commission_rate: row.commission_rate,
            commission_type: row.commission_type.into(),
            rate_per_night: row.rate_per_night,
            subtotal: row.subtotal,
            tax_amount: row.tax_amount,
            commission_amount: row.commission_amount,
            total_amount: row.total_amount,
            deposit_amount: row.deposit_amount,
            notes: row.notes,
        }
    }
}

/// Reservation model from database
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub client_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub bungalow_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Time-of-day strings, display only; billing is in whole days
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub status: ReservationStatus,
    /// Booking channel (e.g. "Site WEB", partner name)
    pub source: Option<String>,
    pub file_number: Option<String>,
    pub is_simulation: bool,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    /// Rate snapshots copied from the catalog at pricing time so later
    /// catalog changes do not retroactively alter this reservation
    pub vehicle_daily_rate: Option<Decimal>,
    pub bungalow_daily_rate: Option<Decimal>,
    pub tax_rate: Decimal,
    pub commission_rate: Decimal,
    pub commission_type: CommissionType,
    pub rate_per_night: Option<Decimal>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub commission_amount: Decimal,
    pub total_amount: Decimal,
    pub deposit_amount: Option<Decimal>,
    pub notes: Option<String>,
}

/// Reservation query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ReservationQuery {
    pub client_id: Option<Uuid>,
    pub status: Option<ReservationStatus>,
    /// Keep reservations overlapping [from, to]
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Create reservation request. Amounts are never taken from the caller;
/// the pricing engine computes them before the row is written.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    pub client_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub bungalow_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub status: Option<ReservationStatus>,
    pub source: Option<String>,
    pub file_number: Option<String>,
    pub is_simulation: Option<bool>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub tax_rate: Option<Decimal>,
    pub commission_rate: Option<Decimal>,
    pub commission_type: Option<CommissionType>,
    pub deposit_amount: Option<Decimal>,
    pub notes: Option<String>,
}

/// Distinguishes "field absent" (no change) from "field null" (detach)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Update reservation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReservation {
    pub client_id: Option<Uuid>,
    /// `Some(None)` detaches the resource, `None` leaves it unchanged
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub vehicle_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub bungalow_id: Option<Option<Uuid>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub source: Option<String>,
    pub file_number: Option<String>,
    pub is_simulation: Option<bool>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub tax_rate: Option<Decimal>,
    pub commission_rate: Option<Decimal>,
    pub commission_type: Option<CommissionType>,
    pub deposit_amount: Option<Decimal>,
    pub notes: Option<String>,
}

/// Update reservation status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReservationStatus {
    pub status: ReservationStatus,
}
