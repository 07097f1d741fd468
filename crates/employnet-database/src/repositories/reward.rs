//! Reward repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_entity::reward::model::{CreateReward, Reward};

/// Repository for write-once reward redemption records.
#[derive(Debug, Clone)]
pub struct RewardRepository {
    pool: PgPool,
}

impl RewardRepository {
    /// Create a new reward repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a reward row inside an open transaction.
    pub async fn create_tx(conn: &mut PgConnection, data: &CreateReward) -> AppResult<Reward> {
        sqlx::query_as::<_, Reward>(
            "INSERT INTO rewards (user_id, points, title) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.points)
        .bind(&data.title)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reward", e))
    }

    /// List rewards for a user with pagination.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Reward>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rewards WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count rewards", e)
            })?;

        let rewards = sqlx::query_as::<_, Reward>(
            "SELECT * FROM rewards WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rewards", e))?;

        Ok(PageResponse::new(
            rewards,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Sum of all points a user has spent on rewards.
    pub async fn total_points_by_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(points), 0)::BIGINT FROM rewards WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to sum reward points", e)
            })
    }
}
