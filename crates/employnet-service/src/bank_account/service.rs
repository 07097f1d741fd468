//! Bank account linking and lookup.

use std::sync::Arc;

use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_database::repositories::bank_account::BankAccountRepository;
use employnet_entity::bank_account::model::{BankAccount, UpsertBankAccount};

use crate::context::RequestContext;

/// Manages the single payout destination each member can have on file.
#[derive(Debug, Clone)]
pub struct BankAccountService {
    bank_accounts: Arc<BankAccountRepository>,
}

impl BankAccountService {
    /// Creates a new bank account service.
    pub fn new(bank_accounts: Arc<BankAccountRepository>) -> Self {
        Self { bank_accounts }
    }

    /// The current user's account on file, if any.
    pub async fn get(&self, ctx: &RequestContext) -> AppResult<Option<BankAccount>> {
        self.bank_accounts.find_by_user(ctx.user_id).await
    }

    /// Link or replace the current user's account. Only the last four
    /// digits of the account number are persisted.
    pub async fn upsert(
        &self,
        ctx: &RequestContext,
        mut data: UpsertBankAccount,
    ) -> AppResult<BankAccount> {
        data.user_id = ctx.user_id;
        if data.account_holder.trim().is_empty() {
            return Err(AppError::validation("Account holder name is required"));
        }
        if data.bank_name.trim().is_empty() {
            return Err(AppError::validation("Bank name is required"));
        }
        let last4 = data.last4();
        if last4.len() != 4 {
            return Err(AppError::validation(
                "Account number must contain at least four digits",
            ));
        }
        let routing_digits = data
            .routing_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if routing_digits != 9 {
            return Err(AppError::validation("Routing number must be nine digits"));
        }

        self.bank_accounts
            .upsert(
                ctx.user_id,
                data.account_holder.trim(),
                data.bank_name.trim(),
                &last4,
                data.routing_number.trim(),
            )
            .await
    }
}
