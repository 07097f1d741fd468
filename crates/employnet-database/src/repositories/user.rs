//! User repository implementation.
//!
//! Balance mutations live here as transaction-scoped helpers. The debit
//! is a conditional UPDATE whose row count tells the caller whether the
//! balance could cover it, which is what makes concurrent double-spends
//! impossible regardless of isolation level.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_entity::user::model::CreateUser;
use employnet_entity::user::{User, UserRole};

/// Repository for user CRUD and balance operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by the identity provider's subject.
    pub async fn find_by_subject(&self, subject: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE subject = $1")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by subject", e)
            })
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new user from an identity-provider event.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (subject, email, display_name, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.subject)
        .bind(&data.email)
        .bind(&data.display_name)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))
    }

    /// Update a user's role.
    pub async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update user role", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a user's verification step.
    pub async fn update_verification_step(&self, id: Uuid, step: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET verification_step = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(step)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update verification step", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a user (identity-provider deletion event).
    pub async fn deactivate(&self, subject: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET is_active = FALSE, updated_at = NOW() WHERE subject = $1",
        )
        .bind(subject)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate user", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Credit points to a user inside an open transaction.
    pub async fn credit_points_tx(
        conn: &mut PgConnection,
        user_id: Uuid,
        points: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET points_balance = points_balance + $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(points)
        .execute(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to credit points", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Debit points from a user inside an open transaction.
    ///
    /// The UPDATE only matches when the balance covers the debit, so a
    /// `false` return means insufficient balance (or missing user) and the
    /// caller must roll the transaction back.
    pub async fn debit_points_tx(
        conn: &mut PgConnection,
        user_id: Uuid,
        points: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET points_balance = points_balance - $2, updated_at = NOW() \
             WHERE id = $1 AND points_balance >= $2",
        )
        .bind(user_id)
        .bind(points)
        .execute(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to debit points", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all users (admin stats).
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
