//! API handlers for the rental REST endpoints

pub mod auth;
pub mod bungalows;
pub mod clients;
pub mod documents;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod settings;
pub mod stats;
pub mod vehicles;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::staff::StaffClaims, AppState};

/// Extractor for an authenticated staff member from the JWT token
pub struct AuthenticatedStaff(pub StaffClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedStaff {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        let claims = StaffClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedStaff(claims))
    }
}
