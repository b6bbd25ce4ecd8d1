//! Documents repository for database operations
//!
//! Document creation allocates the sequential number and inserts the
//! snapshot inside one transaction, so two concurrent compositions can
//! never share a number and a failed insert never consumes one.

use chrono::Datelike;
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::document::{format_number, Document, DocumentQuery, DocumentRow, NewDocument},
    models::payment::{CreatePayment, Payment, PaymentRow},
};

/// Attempts before giving up on number allocation
const ALLOCATION_RETRIES: u32 = 3;

#[derive(Clone)]
pub struct DocumentsRepository {
    pool: Pool<Postgres>,
}

impl DocumentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get document by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Document> {
        let row = sqlx::query_as::<_, DocumentRow>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document with id {} not found", id)))?;

        Ok(row.into())
    }

    /// List documents with type/status/client filters
    pub async fn list(&self, query: &DocumentQuery) -> AppResult<(Vec<Document>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT * FROM documents
            WHERE ($1::text IS NULL OR doc_type = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::uuid IS NULL OR client_id = $3)
            ORDER BY issue_date DESC, number DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.doc_type.map(|t| t.as_str()))
        .bind(status)
        .bind(query.client_id)
        .bind(per_page)
        .bind((page - 1) * per_page)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM documents
            WHERE ($1::text IS NULL OR doc_type = $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::uuid IS NULL OR client_id = $3)
            "#,
        )
        .bind(query.doc_type.map(|t| t.as_str()))
        .bind(status)
        .bind(query.client_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Insert a composed document, allocating the next `{D|F}{year}-{seq}`
    /// number from the per-(type, year) counter in the same transaction.
    pub async fn create(&self, doc: &NewDocument) -> AppResult<Document> {
        let year = doc.issue_date.year();

        let mut last_err = None;
        for attempt in 1..=ALLOCATION_RETRIES {
            match self.try_create(doc, year).await {
                Ok(created) => return Ok(created),
                Err(AppError::Database(err)) => {
                    tracing::warn!(
                        attempt,
                        error = %err,
                        "Document number allocation failed, retrying"
                    );
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::error!(?last_err, "Document number allocation exhausted retries");
        Err(AppError::Conflict(
            "Could not allocate a document number, please retry".to_string(),
        ))
    }

    async fn try_create(&self, doc: &NewDocument, year: i32) -> AppResult<Document> {
        let mut tx = self.pool.begin().await?;

        let seq: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO document_counters (doc_type, year, seq)
            VALUES ($1, $2, 1)
            ON CONFLICT (doc_type, year)
            DO UPDATE SET seq = document_counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(doc.doc_type.as_str())
        .bind(year)
        .fetch_one(&mut *tx)
        .await?;

        let number = format_number(doc.doc_type, year, seq);

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (
                doc_type, number, issue_date, due_date, status, client_id,
                subtotal, tax_rate, tax_amount, total_amount,
                company_details, client_details, lines, notes
            )
            VALUES ($1, $2, $3, $4, 'draft', $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(doc.doc_type.as_str())
        .bind(&number)
        .bind(doc.issue_date)
        .bind(doc.due_date)
        .bind(doc.client_id)
        .bind(doc.subtotal)
        .bind(doc.tax_rate)
        .bind(doc.tax_amount)
        .bind(doc.total_amount)
        .bind(Json(doc.company_details.clone()))
        .bind(Json(doc.client_details.clone()))
        .bind(Json(doc.lines.clone()))
        .bind(&doc.notes)
        .fetch_one(&mut *tx)
        .await?;

        let document: Document = row.into();

        for line in &document.lines {
            sqlx::query(
                "INSERT INTO document_reservations (document_id, reservation_id) VALUES ($1, $2)",
            )
            .bind(document.id)
            .bind(line.reservation_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(document)
    }

    /// Update document status
    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Document> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "UPDATE documents SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Whether any document already references the given reservation
    pub async fn exists_for_reservation(&self, reservation_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM document_reservations WHERE reservation_id = $1)",
        )
        .bind(reservation_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Record a payment against a document
    pub async fn create_payment(&self, document_id: Uuid, payment: &CreatePayment) -> AppResult<Payment> {
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            INSERT INTO payments (document_id, amount, payment_date, payment_method, reference_number, notes)
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(document_id)
        .bind(payment.amount)
        .bind(payment.payment_date)
        .bind(payment.payment_method.as_str())
        .bind(&payment.reference_number)
        .bind(&payment.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// List payments recorded against a document
    pub async fn list_payments(&self, document_id: Uuid) -> AppResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            "SELECT * FROM payments WHERE document_id = $1 ORDER BY payment_date",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Sum of payments recorded against a document
    pub async fn payments_total(&self, document_id: Uuid) -> AppResult<rust_decimal::Decimal> {
        let total: Option<rust_decimal::Decimal> =
            sqlx::query_scalar("SELECT SUM(amount) FROM payments WHERE document_id = $1")
                .bind(document_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(total.unwrap_or_default())
    }

    /// Count documents of a type issued in a year
    pub async fn count_for_year(&self, doc_type: &str, year: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE doc_type = $1 AND EXTRACT(YEAR FROM issue_date) = $2",
        )
        .bind(doc_type)
        .bind(year)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Invoiced revenue (paid invoices) for a year
    pub async fn revenue_for_year(&self, year: i32) -> AppResult<rust_decimal::Decimal> {
        let total: Option<rust_decimal::Decimal> = sqlx::query_scalar(
            r#"
            SELECT SUM(total_amount) FROM documents
            WHERE doc_type = 'invoice' AND status = 'paid'
              AND EXTRACT(YEAR FROM issue_date) = $1
            "#,
        )
        .bind(year)
        .fetch_one(&self.pool)
        .await?;
        Ok(total.unwrap_or_default())
    }
}
