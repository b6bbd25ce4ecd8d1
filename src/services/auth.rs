//! Staff authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::staff::{LoginResponse, Staff, StaffClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a staff account and return a bearer token
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<LoginResponse> {
        let staff = self
            .repository
            .staff
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login or password".to_string()))?;

        if !self.verify_password(&staff, password)? {
            return Err(AppError::Authentication("Invalid login or password".to_string()));
        }

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = StaffClaims {
            sub: staff.login.clone(),
            staff_id: staff.id,
            role: staff.role,
            exp,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            staff_id: staff.id,
            full_name: staff.full_name,
            role: staff.role,
        })
    }

    /// Get staff account by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Staff> {
        self.repository.staff.get_by_id(id).await
    }

    fn verify_password(&self, staff: &Staff, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&staff.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
