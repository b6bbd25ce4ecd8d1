//! Staff account model and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

use super::enums::StaffRole;

/// Internal row structure for database queries
#[derive(Debug, Clone, FromRow)]
pub struct StaffRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    login: String,
    password_hash: String,
    full_name: Option<String>,
    role: String,
}

impl From<StaffRow> for Staff {
    fn from(row: StaffRow) -> Self {
        Staff {
            id: row.id,
            created_at: row.created_at,
            login: row.login,
            password_hash: row.password_hash,
            full_name: row.full_name,
            role: row.role.into(),
        }
    }
}

/// Staff account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Staff {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub login: String,
    /// Argon2 hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: StaffRole,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Login response with bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub staff_id: Uuid,
    pub full_name: Option<String>,
    pub role: StaffRole,
}

/// JWT claims for authenticated staff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String,
    pub staff_id: Uuid,
    pub role: StaffRole,
    pub exp: i64,
    pub iat: i64,
}

impl StaffClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }

    /// Require admin privileges (settings mutation)
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}
