//! Client model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Client model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub spouse_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub address_complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Preferred language (ISO 639-1 code: "fr", "en", ...)
    pub language: Option<String>,
    pub phone_home: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_other: Option<String>,
    pub email: Option<String>,
    pub no_email: bool,
    pub birth_date: Option<String>,
    pub driver_license: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub preferences: Option<String>,
    pub comments: Option<String>,
    pub blacklisted: bool,
    pub blacklist_reason: Option<String>,
}

/// Client query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ClientQuery {
    /// Search in first or last name
    pub name: Option<String>,
    pub blacklisted: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub spouse_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub address_complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub phone_home: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_other: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub no_email: Option<bool>,
    pub birth_date: Option<String>,
    pub driver_license: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub preferences: Option<String>,
    pub comments: Option<String>,
}

/// Update client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClient {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub spouse_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub address_complement: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub phone_home: Option<String>,
    pub phone_mobile: Option<String>,
    pub phone_other: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub no_email: Option<bool>,
    pub birth_date: Option<String>,
    pub driver_license: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub preferences: Option<String>,
    pub comments: Option<String>,
    pub blacklisted: Option<bool>,
    pub blacklist_reason: Option<String>,
}
