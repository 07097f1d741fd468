//! Verification request repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_entity::verification::model::CreateVerificationRequest;
use employnet_entity::verification::{VerificationRequest, VerificationStatus};

/// Repository for verification request workflow state.
#[derive(Debug, Clone)]
pub struct VerificationRepository {
    pool: PgPool,
}

impl VerificationRepository {
    /// Create a new verification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VerificationRequest>> {
        sqlx::query_as::<_, VerificationRequest>(
            "SELECT * FROM verification_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find verification request", e)
        })
    }

    /// Find a user's request in the given status, if any.
    pub async fn find_by_user_and_status(
        &self,
        user_id: Uuid,
        status: VerificationStatus,
    ) -> AppResult<Option<VerificationRequest>> {
        sqlx::query_as::<_, VerificationRequest>(
            "SELECT * FROM verification_requests WHERE user_id = $1 AND status = $2 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find verification request by status",
                e,
            )
        })
    }

    /// List all requests, optionally filtered by status (admin view).
    pub async fn find_all(
        &self,
        status: Option<VerificationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VerificationRequest>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM verification_requests \
             WHERE ($1::verification_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count verification requests", e)
        })?;

        let requests = sqlx::query_as::<_, VerificationRequest>(
            "SELECT * FROM verification_requests \
             WHERE ($1::verification_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list verification requests", e)
        })?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new waiting request.
    pub async fn create(&self, data: &CreateVerificationRequest) -> AppResult<VerificationRequest> {
        sqlx::query_as::<_, VerificationRequest>(
            "INSERT INTO verification_requests (user_id, activity_id, status) \
             VALUES ($1, $2, 'waiting') RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.activity_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create verification request", e)
        })
    }

    /// Transition a request to a new status, guarded by the expected
    /// current status so out-of-band writes cannot skip the table.
    pub async fn transition(
        &self,
        id: Uuid,
        from: VerificationStatus,
        to: VerificationStatus,
        verification_url: Option<&str>,
        completed_at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<VerificationRequest>> {
        sqlx::query_as::<_, VerificationRequest>(
            "UPDATE verification_requests SET status = $3, \
             verification_url = COALESCE($4, verification_url), \
             completed_at = COALESCE($5, completed_at), updated_at = NOW() \
             WHERE id = $1 AND status = $2 RETURNING *",
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .bind(verification_url)
        .bind(completed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to transition verification request",
                e,
            )
        })
    }
}
