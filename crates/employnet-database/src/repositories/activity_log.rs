//! Activity log repository implementation.
//!
//! Logs are append-only; this repository deliberately has no update or
//! delete methods.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_entity::activity_log::model::{ActivityLog, CreateActivityLog};

/// Repository for append-only activity completion records.
#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    /// Create a new activity log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a log row inside an open transaction.
    pub async fn append_tx(
        conn: &mut PgConnection,
        data: &CreateActivityLog,
    ) -> AppResult<ActivityLog> {
        sqlx::query_as::<_, ActivityLog>(
            "INSERT INTO activity_logs (user_id, activity_id, points, log_type, metadata) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.activity_id)
        .bind(data.points)
        .bind(&data.log_type)
        .bind(&data.metadata)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append activity log", e))
    }

    /// List the most recent completions for a user.
    pub async fn find_recent_by_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<ActivityLog>> {
        sqlx::query_as::<_, ActivityLog>(
            "SELECT * FROM activity_logs WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activity logs", e))
    }

    /// Count completions for a user.
    pub async fn count_by_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM activity_logs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count activity logs", e)
            })
    }

    /// Sum of all points ever credited to a user.
    pub async fn total_points_by_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(points), 0)::BIGINT FROM activity_logs WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum activity log points", e))
    }
}
