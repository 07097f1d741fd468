//! Bank account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A member's payout destination. At most one per user; required before
/// a payout can be requested.
///
/// Only the last four digits of the account number are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BankAccount {
    /// Unique bank account identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Account holder name.
    pub account_holder: String,
    /// Bank name.
    pub bank_name: String,
    /// Last four digits of the account number.
    pub account_number_last4: String,
    /// Routing number.
    pub routing_number: String,
    /// When the account was linked.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for linking or replacing a user's bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertBankAccount {
    /// The owning user.
    pub user_id: Uuid,
    /// Account holder name.
    pub account_holder: String,
    /// Bank name.
    pub bank_name: String,
    /// Full account number; only the last four digits are stored.
    pub account_number: String,
    /// Routing number.
    pub routing_number: String,
}

impl UpsertBankAccount {
    /// The last four digits of the provided account number.
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self.account_number.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.iter().rev().take(4).rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last4_strips_separators() {
        let upsert = UpsertBankAccount {
            user_id: Uuid::new_v4(),
            account_holder: "A. Member".to_string(),
            bank_name: "First Example".to_string(),
            account_number: "1234-5678-9012".to_string(),
            routing_number: "021000021".to_string(),
        };
        assert_eq!(upsert.last4(), "9012");
    }
}
