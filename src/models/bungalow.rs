//! Bungalow (lodging) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::BungalowStatus;

/// Amenities stored as JSON on the bungalow record
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BungalowFeatures {
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub aircon: Option<bool>,
    pub wifi: Option<bool>,
}

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct BungalowRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    description: Option<String>,
    capacity: i32,
    daily_rate: Decimal,
    status: String,
    features: Option<Json<BungalowFeatures>>,
    last_maintenance: Option<DateTime<Utc>>,
    next_maintenance: Option<DateTime<Utc>>,
    notes: Option<String>,
    image_url: Option<String>,
}

impl From<BungalowRow> for Bungalow {
    fn from(row: BungalowRow) -> Self {
        Bungalow {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            name: row.name,
            description: row.description,
            capacity: row.capacity,
            daily_rate: row.daily_rate,
            status: row.status.into(),
            features: row.features.map(|j| j.0),
            last_maintenance: row.last_maintenance,
            next_maintenance: row.next_maintenance,
            notes: row.notes,
            image_url: row.image_url,
        }
    }
}

/// Bungalow model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Bungalow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    /// Current catalog rate; snapshotted onto reservations at pricing time
    pub daily_rate: Decimal,
    pub status: BungalowStatus,
    pub features: Option<BungalowFeatures>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Bungalow query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BungalowQuery {
    pub status: Option<BungalowStatus>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Create bungalow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBungalow {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub daily_rate: Decimal,
    pub status: Option<BungalowStatus>,
    pub features: Option<BungalowFeatures>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Update bungalow request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBungalow {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub daily_rate: Option<Decimal>,
    pub status: Option<BungalowStatus>,
    pub features: Option<BungalowFeatures>,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}
