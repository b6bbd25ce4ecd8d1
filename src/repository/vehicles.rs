//! Vehicles repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle, VehicleQuery, VehicleRow},
};

#[derive(Clone)]
pub struct VehiclesRepository {
    pool: Pool<Postgres>,
}

impl VehiclesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get vehicle by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", id)))?;

        Ok(row.into())
    }

    /// List vehicles with optional status filter
    pub async fn list(&self, query: &VehicleQuery) -> AppResult<(Vec<Vehicle>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY brand, model
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(per_page)
        .bind((page - 1) * per_page)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM vehicles WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Create a new vehicle
    pub async fn create(&self, vehicle: &CreateVehicle) -> AppResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (
                brand, model, year, license_plate, color, daily_rate, status,
                mileage, last_maintenance, next_maintenance, notes, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.color)
        .bind(vehicle.daily_rate)
        .bind(vehicle.status.unwrap_or(crate::models::VehicleStatus::Available).as_str())
        .bind(vehicle.mileage)
        .bind(vehicle.last_maintenance)
        .bind(vehicle.next_maintenance)
        .bind(&vehicle.notes)
        .bind(&vehicle.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update an existing vehicle
    pub async fn update(&self, id: Uuid, vehicle: &UpdateVehicle) -> AppResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles SET
                brand = COALESCE($2, brand),
                model = COALESCE($3, model),
                year = COALESCE($4, year),
                license_plate = COALESCE($5, license_plate),
                color = COALESCE($6, color),
                daily_rate = COALESCE($7, daily_rate),
                status = COALESCE($8, status),
                mileage = COALESCE($9, mileage),
                last_maintenance = COALESCE($10, last_maintenance),
                next_maintenance = COALESCE($11, next_maintenance),
                notes = COALESCE($12, notes),
                image_url = COALESCE($13, image_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.color)
        .bind(vehicle.daily_rate)
        .bind(vehicle.status.map(|s| s.as_str()))
        .bind(vehicle.mileage)
        .bind(vehicle.last_maintenance)
        .bind(vehicle.next_maintenance)
        .bind(&vehicle.notes)
        .bind(&vehicle.image_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Delete a vehicle
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vehicle with id {} not found", id)));
        }
        Ok(())
    }

    /// Count vehicles by status
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
