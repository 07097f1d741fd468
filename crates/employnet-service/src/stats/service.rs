//! Aggregate statistics for member and admin dashboards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use employnet_cache::CacheManager;
use employnet_cache::keys;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_core::traits::cache::CacheProvider;
use employnet_database::repositories::activity_log::ActivityLogRepository;
use employnet_database::repositories::payout::{PayoutRepository, PayoutTotals};
use employnet_database::repositories::reward::RewardRepository;
use employnet_database::repositories::user::UserRepository;

use crate::context::RequestContext;

/// Per-user dashboard aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    /// Current points balance.
    pub points_balance: i64,
    /// Points ever earned through completions.
    pub total_earned: i64,
    /// Points ever spent on rewards.
    pub total_redeemed: i64,
    /// Number of completed activities.
    pub completed_count: i64,
}

/// Serves dashboard aggregates, cache-aside.
#[derive(Debug, Clone)]
pub struct StatsService {
    users: Arc<UserRepository>,
    logs: Arc<ActivityLogRepository>,
    rewards: Arc<RewardRepository>,
    payouts: Arc<PayoutRepository>,
    cache: Arc<CacheManager>,
    stats_ttl: std::time::Duration,
    payout_ttl: std::time::Duration,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        users: Arc<UserRepository>,
        logs: Arc<ActivityLogRepository>,
        rewards: Arc<RewardRepository>,
        payouts: Arc<PayoutRepository>,
        cache: Arc<CacheManager>,
        stats_ttl_seconds: u64,
        payout_ttl_seconds: u64,
    ) -> Self {
        Self {
            users,
            logs,
            rewards,
            payouts,
            cache,
            stats_ttl: std::time::Duration::from_secs(stats_ttl_seconds),
            payout_ttl: std::time::Duration::from_secs(payout_ttl_seconds),
        }
    }

    /// The current user's dashboard aggregates.
    pub async fn user_stats(&self, ctx: &RequestContext) -> AppResult<UserStats> {
        let key = keys::user_stats(ctx.user_id);
        if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
            if let Ok(stats) = serde_json::from_str(&cached) {
                return Ok(stats);
            }
        }

        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let total_earned = self.logs.total_points_by_user(ctx.user_id).await?;
        let total_redeemed = self.rewards.total_points_by_user(ctx.user_id).await?;
        let completed_count = self.logs.count_by_user(ctx.user_id).await?;

        let stats = UserStats {
            points_balance: user.points_balance,
            total_earned,
            total_redeemed,
            completed_count,
        };

        if let Err(e) = self.cache.set_json(&key, &stats, self.stats_ttl).await {
            warn!(error = %e, key, "Failed to cache user stats");
        }
        Ok(stats)
    }

    /// The current user's payout totals.
    pub async fn payout_stats_for_user(&self, ctx: &RequestContext) -> AppResult<PayoutTotals> {
        let key = keys::payout_stats_for_user(ctx.user_id);
        if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
            if let Ok(totals) = serde_json::from_str(&cached) {
                return Ok(totals);
            }
        }

        let totals = self.payouts.totals_for_user(ctx.user_id).await?;

        if let Err(e) = self.cache.set_json(&key, &totals, self.payout_ttl).await {
            warn!(error = %e, key, "Failed to cache payout stats");
        }
        Ok(totals)
    }

    /// Platform-wide payout totals (admin dashboard).
    pub async fn payout_stats(&self, ctx: &RequestContext) -> AppResult<PayoutTotals> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }

        let key = keys::payout_stats();
        if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
            if let Ok(totals) = serde_json::from_str(&cached) {
                return Ok(totals);
            }
        }

        let totals = self.payouts.totals().await?;

        if let Err(e) = self.cache.set_json(&key, &totals, self.payout_ttl).await {
            warn!(error = %e, key, "Failed to cache payout stats");
        }
        Ok(totals)
    }

    /// Invalidate a user's cached aggregates after an out-of-band change.
    pub async fn invalidate_for_user(&self, user_id: Uuid) {
        for key in [
            keys::user_stats(user_id),
            keys::payout_stats_for_user(user_id),
        ] {
            if let Err(e) = self.cache.delete(&key).await {
                warn!(error = %e, key, "Failed to invalidate cache key");
            }
        }
    }
}
