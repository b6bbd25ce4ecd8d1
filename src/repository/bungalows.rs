//! Bungalows repository for database operations

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::bungalow::{Bungalow, BungalowQuery, BungalowRow, CreateBungalow, UpdateBungalow},
};

#[derive(Clone)]
pub struct BungalowsRepository {
    pool: Pool<Postgres>,
}

impl BungalowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get bungalow by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Bungalow> {
        let row = sqlx::query_as::<_, BungalowRow>("SELECT * FROM bungalows WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bungalow with id {} not found", id)))?;

        Ok(row.into())
    }

    /// List bungalows with optional status filter
    pub async fn list(&self, query: &BungalowQuery) -> AppResult<(Vec<Bungalow>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, BungalowRow>(
            r#"
            SELECT * FROM bungalows
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(per_page)
        .bind((page - 1) * per_page)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bungalows WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Create a new bungalow
    pub async fn create(&self, bungalow: &CreateBungalow) -> AppResult<Bungalow> {
        let row = sqlx::query_as::<_, BungalowRow>(
            r#"
            INSERT INTO bungalows (
                name, description, capacity, daily_rate, status, features,
                last_maintenance, next_maintenance, notes, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&bungalow.name)
        .bind(&bungalow.description)
        .bind(bungalow.capacity)
        .bind(bungalow.daily_rate)
        .bind(bungalow.status.unwrap_or(crate::models::BungalowStatus::Available).as_str())
        .bind(bungalow.features.as_ref().map(|f| Json(f.clone())))
        .bind(bungalow.last_maintenance)
        .bind(bungalow.next_maintenance)
        .bind(&bungalow.notes)
        .bind(&bungalow.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update an existing bungalow
    pub async fn update(&self, id: Uuid, bungalow: &UpdateBungalow) -> AppResult<Bungalow> {
        let row = sqlx::query_as::<_, BungalowRow>(
            r#"
            UPDATE bungalows SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                capacity = COALESCE($4, capacity),
                daily_rate = COALESCE($5, daily_rate),
                status = COALESCE($6, status),
                features = COALESCE($7, features),
                last_maintenance = COALESCE($8, last_maintenance),
                next_maintenance = COALESCE($9, next_maintenance),
                notes = COALESCE($10, notes),
                image_url = COALESCE($11, image_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&bungalow.name)
        .bind(&bungalow.description)
        .bind(bungalow.capacity)
        .bind(bungalow.daily_rate)
        .bind(bungalow.status.map(|s| s.as_str()))
        .bind(bungalow.features.as_ref().map(|f| Json(f.clone())))
        .bind(bungalow.last_maintenance)
        .bind(bungalow.next_maintenance)
        .bind(&bungalow.notes)
        .bind(&bungalow.image_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bungalow with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Delete a bungalow
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bungalows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Bungalow with id {} not found", id)));
        }
        Ok(())
    }

    /// Count bungalows by status
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bungalows WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
