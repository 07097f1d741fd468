//! Ledger reconciliation audit.
//!
//! Every balance change commits together with a corroborating record, so
//! for each user: balance == earned - redeemed - non-refunded payout
//! debits. This job recomputes that sum and logs any drift. It never
//! repairs balances; drift means a bug or manual intervention and a
//! human decides what to do.

use std::sync::Arc;

use tracing::{error, info};

use employnet_core::result::AppResult;
use employnet_core::types::pagination::PageRequest;
use employnet_database::repositories::activity_log::ActivityLogRepository;
use employnet_database::repositories::payout::PayoutRepository;
use employnet_database::repositories::reward::RewardRepository;
use employnet_database::repositories::user::UserRepository;

/// Users examined per page during the sweep.
const RECONCILE_PAGE_SIZE: u64 = 100;

/// Audits every user's balance against the ledger records.
#[derive(Debug)]
pub struct LedgerReconcileJob {
    users: Arc<UserRepository>,
    logs: Arc<ActivityLogRepository>,
    rewards: Arc<RewardRepository>,
    payouts: Arc<PayoutRepository>,
}

impl LedgerReconcileJob {
    /// Create a new reconcile job.
    pub fn new(
        users: Arc<UserRepository>,
        logs: Arc<ActivityLogRepository>,
        rewards: Arc<RewardRepository>,
        payouts: Arc<PayoutRepository>,
    ) -> Self {
        Self {
            users,
            logs,
            rewards,
            payouts,
        }
    }

    /// Run one full sweep. Returns the number of users with drift.
    pub async fn run(&self) -> AppResult<u64> {
        let mut drifted = 0u64;
        let mut checked = 0u64;
        let mut page_number = 1u64;

        loop {
            let page = self
                .users
                .find_all(&PageRequest::new(page_number, RECONCILE_PAGE_SIZE))
                .await?;

            for user in &page.items {
                let earned = self.logs.total_points_by_user(user.id).await?;
                let redeemed = self.rewards.total_points_by_user(user.id).await?;
                let payout_totals = self.payouts.totals_for_user(user.id).await?;
                // Rejected payouts were refunded, so only completed and
                // outstanding amounts remain debited.
                let paid_out = payout_totals.completed_cents + payout_totals.outstanding_cents;

                let expected = earned - redeemed - paid_out;
                if expected != user.points_balance {
                    drifted += 1;
                    error!(
                        user_id = %user.id,
                        balance = user.points_balance,
                        expected,
                        earned,
                        redeemed,
                        paid_out,
                        "Ledger drift detected"
                    );
                }
                checked += 1;
            }

            if !page.has_next {
                break;
            }
            page_number += 1;
        }

        info!(checked, drifted, "Ledger reconciliation finished");
        Ok(drifted)
    }
}
