//! Bank account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_entity::bank_account::model::BankAccount;

/// Repository for per-user payout destinations.
#[derive(Debug, Clone)]
pub struct BankAccountRepository {
    pool: PgPool,
}

impl BankAccountRepository {
    /// Create a new bank account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the account on file for a user, if any.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<BankAccount>> {
        sqlx::query_as::<_, BankAccount>("SELECT * FROM bank_accounts WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find bank account", e)
            })
    }

    /// Check whether a user has an account on file.
    pub async fn exists_for_user(&self, user_id: Uuid) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bank_accounts WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check bank account", e)
                })?;
        Ok(count > 0)
    }

    /// Insert or replace the user's single account (UNIQUE on user_id).
    pub async fn upsert(
        &self,
        user_id: Uuid,
        account_holder: &str,
        bank_name: &str,
        account_number_last4: &str,
        routing_number: &str,
    ) -> AppResult<BankAccount> {
        sqlx::query_as::<_, BankAccount>(
            "INSERT INTO bank_accounts (user_id, account_holder, bank_name, account_number_last4, routing_number) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (user_id) DO UPDATE SET \
               account_holder = EXCLUDED.account_holder, \
               bank_name = EXCLUDED.bank_name, \
               account_number_last4 = EXCLUDED.account_number_last4, \
               routing_number = EXCLUDED.routing_number, \
               updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(account_holder)
        .bind(bank_name)
        .bind(account_number_last4)
        .bind(routing_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert bank account", e))
    }
}
