//! Reservations repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, Reservation, ReservationQuery, ReservationRow},
    pricing::ComputedAmounts,
};

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Get several reservations of one client, in the given order
    pub async fn get_for_client(&self, client_id: Uuid, ids: &[Uuid]) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            "SELECT * FROM reservations WHERE client_id = $1 AND id = ANY($2) ORDER BY start_date",
        )
        .bind(client_id)
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List reservations with client/status/period filters
    pub async fn list(&self, query: &ReservationQuery) -> AppResult<(Vec<Reservation>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT * FROM reservations
            WHERE ($1::uuid IS NULL OR client_id = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::timestamptz IS NULL OR end_date > $3)
              AND ($4::timestamptz IS NULL OR start_date < $4)
            ORDER BY start_date DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(query.client_id)
        .bind(status)
        .bind(query.from)
        .bind(query.to)
        .bind(per_page)
        .bind((page - 1) * per_page)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM reservations
            WHERE ($1::uuid IS NULL OR client_id = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::timestamptz IS NULL OR end_date > $3)
              AND ($4::timestamptz IS NULL OR start_date < $4)
            "#,
        )
        .bind(query.client_id)
        .bind(status)
        .bind(query.from)
        .bind(query.to)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Create a reservation with amounts already computed by the pricing
    /// engine. The rate snapshots are stored alongside so later catalog
    /// price changes never alter this reservation.
    pub async fn create(
        &self,
        res: &CreateReservation,
        vehicle_rate: Option<Decimal>,
        bungalow_rate: Option<Decimal>,
        amounts: &ComputedAmounts,
    ) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservations (
                client_id, vehicle_id, bungalow_id, start_date, end_date,
                check_in_time, check_out_time, status, source, file_number,
                is_simulation, adults, children,
                vehicle_daily_rate, bungalow_daily_rate,
                tax_rate, commission_rate, commission_type,
                rate_per_night, subtotal, tax_amount, commission_amount,
                total_amount, deposit_amount, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25)
            RETURNING *
            "#,
        )
        .bind(res.client_id)
        .bind(res.vehicle_id)
        .bind(res.bungalow_id)
        .bind(res.start_date)
        .bind(res.end_date)
        .bind(&res.check_in_time)
        .bind(&res.check_out_time)
        .bind(res.status.unwrap_or(crate::models::ReservationStatus::Confirmed).as_str())
        .bind(&res.source)
        .bind(&res.file_number)
        .bind(res.is_simulation.unwrap_or(false))
        .bind(res.adults)
        .bind(res.children)
        .bind(vehicle_rate)
        .bind(bungalow_rate)
        .bind(res.tax_rate.unwrap_or(Decimal::ZERO))
        .bind(res.commission_rate.unwrap_or(Decimal::ZERO))
        .bind(res.commission_type.unwrap_or(crate::models::CommissionType::None).as_str())
        .bind(amounts.rate_per_night)
        .bind(amounts.subtotal)
        .bind(amounts.tax_amount)
        .bind(amounts.commission_amount)
        .bind(amounts.total_amount)
        .bind(res.deposit_amount)
        .bind(&res.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Write back a fully merged reservation (fields and recomputed
    /// amounts) in a single statement, so a failed save leaves the stored
    /// row untouched.
    pub async fn update(&self, res: &Reservation) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            UPDATE reservations SET
                client_id = $2,
                vehicle_id = $3,
                bungalow_id = $4,
                start_date = $5,
                end_date = $6,
                check_in_time = $7,
                check_out_time = $8,
                source = $9,
                file_number = $10,
                is_simulation = $11,
                adults = $12,
                children = $13,
                vehicle_daily_rate = $14,
                bungalow_daily_rate = $15,
                tax_rate = $16,
                commission_rate = $17,
                commission_type = $18,
                rate_per_night = $19,
                subtotal = $20,
                tax_amount = $21,
                commission_amount = $22,
                total_amount = $23,
                deposit_amount = $24,
                notes = $25,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(res.id)
        .bind(res.client_id)
        .bind(res.vehicle_id)
        .bind(res.bungalow_id)
        .bind(res.start_date)
        .bind(res.end_date)
        .bind(&res.check_in_time)
        .bind(&res.check_out_time)
        .bind(&res.source)
        .bind(&res.file_number)
        .bind(res.is_simulation)
        .bind(res.adults)
        .bind(res.children)
        .bind(res.vehicle_daily_rate)
        .bind(res.bungalow_daily_rate)
        .bind(res.tax_rate)
        .bind(res.commission_rate)
        .bind(res.commission_type.as_str())
        .bind(res.rate_per_night)
        .bind(res.subtotal)
        .bind(res.tax_amount)
        .bind(res.commission_amount)
        .bind(res.total_amount)
        .bind(res.deposit_amount)
        .bind(&res.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", res.id)))?;

        Ok(row.into())
    }

    /// Update reservation status
    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Delete a reservation
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Reservation with id {} not found", id)));
        }
        Ok(())
    }

    /// Count reservations currently in a given status
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
