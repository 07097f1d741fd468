//! Activity repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_entity::activity::model::CreateActivity;
use employnet_entity::activity::{Activity, ActivityStatus};

/// Repository for activity CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an activity by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Activity>> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find activity by id", e)
            })
    }

    /// Lock an activity row for update inside an open transaction.
    ///
    /// The ledger reads the row under `FOR UPDATE` so two concurrent
    /// completions of the same activity serialize on the row lock and the
    /// second sees status `completed`.
    pub async fn find_for_update_tx(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Activity>> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock activity row", e)
            })
    }

    /// List all active activities (member-facing catalog).
    pub async fn find_active(&self) -> AppResult<Vec<Activity>> {
        sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE status = 'active' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active activities", e)
        })
    }

    /// List all activities with pagination (admin view).
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Activity>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count activities", e)
            })?;

        let activities = sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))?;

        Ok(PageResponse::new(
            activities,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new activity.
    pub async fn create(&self, data: &CreateActivity) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (title, description, activity_type, points, status, user_id, created_by, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.activity_type)
        .bind(data.points)
        .bind(data.status)
        .bind(data.user_id)
        .bind(data.created_by)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create activity", e))
    }

    /// Update an activity's mutable fields (admin edit).
    pub async fn update(&self, activity: &Activity) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>(
            "UPDATE activities SET title = $2, description = $3, points = $4, status = $5, \
             metadata = $6, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(activity.id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(activity.points)
        .bind(activity.status)
        .bind(&activity.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update activity", e))
    }

    /// Mark an activity completed inside an open transaction.
    pub async fn mark_completed_tx(
        conn: &mut PgConnection,
        id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE activities SET status = $2, completed_at = $3, updated_at = NOW() \
             WHERE id = $1 AND status <> 'completed'",
        )
        .bind(id)
        .bind(ActivityStatus::Completed)
        .bind(completed_at)
        .execute(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark activity completed", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark an activity errored (webhook reported a failure).
    pub async fn mark_error(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE activities SET status = 'error', updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark activity errored", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
