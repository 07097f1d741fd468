//! Activity completion credits and reward redemption debits.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use employnet_cache::CacheManager;
use employnet_cache::keys;
use employnet_core::error::{AppError, ErrorKind};
use employnet_core::events::{DomainEvent, EventPayload};
use employnet_core::result::AppResult;
use employnet_core::traits::cache::CacheProvider;
use employnet_database::repositories::activity::ActivityRepository;
use employnet_database::repositories::activity_log::ActivityLogRepository;
use employnet_database::repositories::notification::NotificationRepository;
use employnet_database::repositories::reward::RewardRepository;
use employnet_database::repositories::user::UserRepository;
use employnet_entity::activity::Activity;
use employnet_entity::activity_log::model::CreateActivityLog;
use employnet_entity::notification::model::CreateNotification;
use employnet_entity::reward::model::{CreateReward, Reward};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Credits and debits against the points balance.
///
/// Completion runs under a `FOR UPDATE` lock on the activity row so a
/// doubled webhook delivery credits at most once. Redemption uses a
/// conditional debit whose row count decides success, so two concurrent
/// spends can never drive the balance negative.
#[derive(Debug, Clone)]
pub struct LedgerService {
    pool: PgPool,
    users: Arc<UserRepository>,
    cache: Arc<CacheManager>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl LedgerService {
    /// Creates a new ledger service.
    pub fn new(
        pool: PgPool,
        users: Arc<UserRepository>,
        cache: Arc<CacheManager>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            pool,
            users,
            cache,
            dispatcher,
        }
    }

    /// Complete an activity for a user, crediting its points.
    ///
    /// Atomically: locks the activity row, flips it to `completed`,
    /// credits the balance, and appends the log row. A second completion
    /// attempt sees the `completed` status and gets a Conflict.
    pub async fn complete_activity(
        &self,
        user_id: Uuid,
        activity_id: Uuid,
        metadata: Option<serde_json::Value>,
    ) -> AppResult<Activity> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let activity = ActivityRepository::find_for_update_tx(&mut tx, activity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))?;

        if !activity.is_completable() {
            return Err(AppError::conflict(format!(
                "Activity is already {}",
                activity.status
            )));
        }
        if let Some(assigned) = activity.user_id {
            if assigned != user_id {
                return Err(AppError::authorization(
                    "Activity is assigned to another user",
                ));
            }
        }

        let now = Utc::now();
        ActivityRepository::mark_completed_tx(&mut tx, activity_id, now).await?;
        // Webhook payloads carry the user id, so it may not exist locally.
        let credited = UserRepository::credit_points_tx(&mut tx, user_id, activity.points).await?;
        if !credited {
            return Err(AppError::not_found("User not found"));
        }
        ActivityLogRepository::append_tx(
            &mut tx,
            &CreateActivityLog {
                user_id,
                activity_id,
                points: activity.points,
                log_type: activity.activity_type.to_string(),
                metadata: metadata.clone(),
            },
        )
        .await?;
        NotificationRepository::create_tx(
            &mut tx,
            &CreateNotification::for_member(
                user_id,
                "activity_completed",
                "Activity completed",
                format!(
                    "You earned {} points for completing '{}'",
                    activity.points, activity.title
                ),
            ),
        )
        .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit completion", e)
        })?;

        info!(%user_id, %activity_id, points = activity.points, "Activity completed");

        self.invalidate_user_caches(user_id).await;
        if let Err(e) = self.cache.delete(&keys::activities_active()).await {
            warn!(error = %e, "Failed to invalidate activity cache");
        }

        let event = DomainEvent::new(
            Some(user_id),
            EventPayload::ActivityCompleted {
                user_id,
                activity_id,
                points: activity.points,
            },
        );
        self.dispatcher.publish_to_user(user_id, &event).await;
        self.dispatcher.publish_to_admins(&event).await;

        Ok(activity)
    }

    /// Redeem points for a reward on the current user's own balance.
    pub async fn redeem(
        &self,
        ctx: &RequestContext,
        points: i64,
        title: &str,
    ) -> AppResult<Reward> {
        self.redeem_for_user(ctx.user_id, points, title).await
    }

    /// Redeem points on behalf of a member identified by email (admin).
    pub async fn redeem_for_email(
        &self,
        ctx: &RequestContext,
        email: &str,
        points: i64,
        title: &str,
    ) -> AppResult<Reward> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("No user with that email"))?;
        self.redeem_for_user(user.id, points, title).await
    }

    async fn redeem_for_user(&self, user_id: Uuid, points: i64, title: &str) -> AppResult<Reward> {
        if points <= 0 {
            return Err(AppError::validation("Redemption points must be positive"));
        }
        if title.trim().is_empty() {
            return Err(AppError::validation("Reward title is required"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // Dropping the transaction on the error path rolls the debit back.
        let debited = UserRepository::debit_points_tx(&mut tx, user_id, points).await?;
        if !debited {
            return Err(AppError::insufficient_balance());
        }

        let reward = RewardRepository::create_tx(
            &mut tx,
            &CreateReward {
                user_id,
                points,
                title: title.to_string(),
            },
        )
        .await?;
        NotificationRepository::create_tx(
            &mut tx,
            &CreateNotification::for_member(
                user_id,
                "reward_redeemed",
                "Reward redeemed",
                format!("{points} points were redeemed for '{title}'"),
            ),
        )
        .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit redemption", e)
        })?;

        info!(%user_id, points, title, "Reward redeemed");

        self.invalidate_user_caches(user_id).await;

        let event = DomainEvent::new(
            Some(user_id),
            EventPayload::RewardRedeemed {
                user_id,
                points,
                title: title.to_string(),
            },
        );
        self.dispatcher.publish_to_user(user_id, &event).await;

        Ok(reward)
    }

    async fn invalidate_user_caches(&self, user_id: Uuid) {
        for key in [
            keys::user_stats(user_id),
            keys::recent_activities(user_id),
        ] {
            if let Err(e) = self.cache.delete(&key).await {
                warn!(error = %e, key, "Failed to invalidate cache key");
            }
        }
    }
}
