//! Vehicle (rental fleet) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::VehicleStatus;

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    brand: String,
    model: String,
    year: Option<i32>,
    license_plate: String,
    color: Option<String>,
    daily_rate: Decimal,
    status: String,
    mileage: Option<i32>,
    last_maintenance: Option<DateTime<Utc>>,
    next_maintenance: Option<DateTime<Utc>>,
    notes: Option<String>,
    image_url: Option<String>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            brand: row.brand,
            model: row.model,
            year: row.year,
            license_plate: row.license_plate,
            color: row.color,
            daily_rate: row.daily_rate,
            status: row.status.into(),
            mileage: row.mileage,
            last_maintenance: row.last_maintenance,
            next_maintenance: row.next_maintenance,
            notes: row.notes,
            image_url: row.image_url,
        }
    }
}

/// Vehicle model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub license_plate: String,
    pub color: Option<String>,
    /// Current catalog rate; snapshotted onto reservations at pricing time
    pub daily_rate: Decimal,
    pub status: VehicleStatus,
    pub mileage: Option<i32>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl Vehicle {
    /// Display label used on documents and lists
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.license_plate)
    }
}

/// Vehicle query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct VehicleQuery {
    pub status: Option<VehicleStatus>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Create vehicle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicle {
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    pub year: Option<i32>,
    #[validate(length(min = 1, message = "License plate is required"))]
    pub license_plate: String,
    pub color: Option<String>,
    pub daily_rate: Decimal,
    pub status: Option<VehicleStatus>,
    pub mileage: Option<i32>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Update vehicle request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVehicle {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub color: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub status: Option<VehicleStatus>,
    pub mileage: Option<i32>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}
