//! Clients repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, ClientQuery, CreateClient, UpdateClient},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client with id {} not found", id)))
    }

    /// Search clients by name with pagination
    pub async fn search(&self, query: &ClientQuery) -> AppResult<(Vec<Client>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let name_pattern = query.name.as_ref().map(|n| format!("%{}%", n));

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT * FROM clients
            WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)
              AND ($2::bool IS NULL OR blacklisted = $2)
            ORDER BY last_name, first_name
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&name_pattern)
        .bind(query.blacklisted)
        .bind(per_page)
        .bind((page - 1) * per_page)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM clients
            WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)
              AND ($2::bool IS NULL OR blacklisted = $2)
            "#,
        )
        .bind(&name_pattern)
        .bind(query.blacklisted)
        .fetch_one(&self.pool)
        .await?;

        Ok((clients, total))
    }

    /// Create a new client
    pub async fn create(&self, client: &CreateClient) -> AppResult<Client> {
        let created = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (
                title, first_name, last_name, spouse_name, company,
                address, address_complement, postal_code, city, country, language,
                phone_home, phone_mobile, phone_other, email, no_email,
                birth_date, driver_license, nationality, passport_number,
                preferences, comments
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            RETURNING *
            "#,
        )
        .bind(&client.title)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.spouse_name)
        .bind(&client.company)
        .bind(&client.address)
        .bind(&client.address_complement)
        .bind(&client.postal_code)
        .bind(&client.city)
        .bind(&client.country)
        .bind(&client.language)
        .bind(&client.phone_home)
        .bind(&client.phone_mobile)
        .bind(&client.phone_other)
        .bind(&client.email)
        .bind(client.no_email.unwrap_or(false))
        .bind(&client.birth_date)
        .bind(&client.driver_license)
        .bind(&client.nationality)
        .bind(&client.passport_number)
        .bind(&client.preferences)
        .bind(&client.comments)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update an existing client
    pub async fn update(&self, id: Uuid, client: &UpdateClient) -> AppResult<Client> {
        let updated = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                title = COALESCE($2, title),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                spouse_name = COALESCE($5, spouse_name),
                company = COALESCE($6, company),
                address = COALESCE($7, address),
                address_complement = COALESCE($8, address_complement),
                postal_code = COALESCE($9, postal_code),
                city = COALESCE($10, city),
                country = COALESCE($11, country),
                language = COALESCE($12, language),
                phone_home = COALESCE($13, phone_home),
                phone_mobile = COALESCE($14, phone_mobile),
                phone_other = COALESCE($15, phone_other),
                email = COALESCE($16, email),
                no_email = COALESCE($17, no_email),
                birth_date = COALESCE($18, birth_date),
                driver_license = COALESCE($19, driver_license),
                nationality = COALESCE($20, nationality),
                passport_number = COALESCE($21, passport_number),
                preferences = COALESCE($22, preferences),
                comments = COALESCE($23, comments),
                blacklisted = COALESCE($24, blacklisted),
                blacklist_reason = COALESCE($25, blacklist_reason),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&client.title)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.spouse_name)
        .bind(&client.company)
        .bind(&client.address)
        .bind(&client.address_complement)
        .bind(&client.postal_code)
        .bind(&client.city)
        .bind(&client.country)
        .bind(&client.language)
        .bind(&client.phone_home)
        .bind(&client.phone_mobile)
        .bind(&client.phone_other)
        .bind(&client.email)
        .bind(client.no_email)
        .bind(&client.birth_date)
        .bind(&client.driver_license)
        .bind(&client.nationality)
        .bind(&client.passport_number)
        .bind(&client.preferences)
        .bind(&client.comments)
        .bind(client.blacklisted)
        .bind(&client.blacklist_reason)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client with id {} not found", id)))?;

        Ok(updated)
    }

    /// Delete a client
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client with id {} not found", id)));
        }
        Ok(())
    }

    /// Count all clients
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
