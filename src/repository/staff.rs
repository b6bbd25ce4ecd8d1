//! Staff accounts repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::staff::{Staff, StaffRow},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get staff account by login, for authentication
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<Staff>> {
        let row = sqlx::query_as::<_, StaffRow>("SELECT * FROM staff WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get staff account by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, StaffRow>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff account with id {} not found", id)))?;

        Ok(row.into())
    }
}
