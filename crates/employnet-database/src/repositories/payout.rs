//! Payout repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_entity::payout::model::CreatePayout;
use employnet_entity::payout::{Payout, PayoutStatus};

/// Aggregate payout figures for dashboards.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct PayoutTotals {
    /// Sum of completed payout amounts in cents.
    pub completed_cents: i64,
    /// Sum of amounts still pending or on the way, in cents.
    pub outstanding_cents: i64,
    /// Number of payouts awaiting admin action.
    pub pending_count: i64,
}

/// Repository for payout CRUD and lifecycle operations.
#[derive(Debug, Clone)]
pub struct PayoutRepository {
    pool: PgPool,
}

impl PayoutRepository {
    /// Create a new payout repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a payout by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Payout>> {
        sqlx::query_as::<_, Payout>("SELECT * FROM payouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find payout by id", e)
            })
    }

    /// Lock a payout row for update inside an open transaction.
    pub async fn find_for_update_tx(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Payout>> {
        sqlx::query_as::<_, Payout>("SELECT * FROM payouts WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock payout row", e))
    }

    /// List payouts for a user with pagination.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Payout>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payouts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count payouts", e)
            })?;

        let payouts = sqlx::query_as::<_, Payout>(
            "SELECT * FROM payouts WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payouts", e))?;

        Ok(PageResponse::new(
            payouts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all payouts, optionally filtered by status (admin view).
    pub async fn find_all(
        &self,
        status: Option<PayoutStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Payout>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM payouts WHERE ($1::payout_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count payouts", e))?;

        let payouts = sqlx::query_as::<_, Payout>(
            "SELECT * FROM payouts WHERE ($1::payout_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payouts", e))?;

        Ok(PageResponse::new(
            payouts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a pending payout inside an open transaction.
    pub async fn create_tx(conn: &mut PgConnection, data: &CreatePayout) -> AppResult<Payout> {
        sqlx::query_as::<_, Payout>(
            "INSERT INTO payouts (user_id, amount_cents, status) \
             VALUES ($1, $2, 'pending') RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.amount_cents)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payout", e))
    }

    /// Update a payout's status and processing metadata inside an open transaction.
    pub async fn update_status_tx(
        conn: &mut PgConnection,
        id: Uuid,
        status: PayoutStatus,
        notes: Option<&str>,
        processed_by: Uuid,
        processed_at: DateTime<Utc>,
    ) -> AppResult<Payout> {
        sqlx::query_as::<_, Payout>(
            "UPDATE payouts SET status = $2, notes = COALESCE($3, notes), \
             processed_by = $4, processed_at = $5 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .bind(processed_by)
        .bind(processed_at)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update payout status", e)
        })
    }

    /// Aggregate totals for a single user's dashboard.
    pub async fn totals_for_user(&self, user_id: Uuid) -> AppResult<PayoutTotals> {
        sqlx::query_as::<_, PayoutTotals>(
            "SELECT \
               COALESCE(SUM(amount_cents) FILTER (WHERE status = 'completed'), 0)::BIGINT AS completed_cents, \
               COALESCE(SUM(amount_cents) FILTER (WHERE status IN ('pending', 'on_the_way')), 0)::BIGINT AS outstanding_cents, \
               COUNT(*) FILTER (WHERE status = 'pending') AS pending_count \
             FROM payouts WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to aggregate payouts", e))
    }

    /// Aggregate totals across all users (admin dashboard).
    pub async fn totals(&self) -> AppResult<PayoutTotals> {
        sqlx::query_as::<_, PayoutTotals>(
            "SELECT \
               COALESCE(SUM(amount_cents) FILTER (WHERE status = 'completed'), 0)::BIGINT AS completed_cents, \
               COALESCE(SUM(amount_cents) FILTER (WHERE status IN ('pending', 'on_the_way')), 0)::BIGINT AS outstanding_cents, \
               COUNT(*) FILTER (WHERE status = 'pending') AS pending_count \
             FROM payouts",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to aggregate payouts", e))
    }
}
