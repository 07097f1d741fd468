//! Activity catalog reads and admin edits.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use employnet_cache::CacheManager;
use employnet_cache::keys;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_core::traits::cache::CacheProvider;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_database::repositories::activity::ActivityRepository;
use employnet_database::repositories::activity_log::ActivityLogRepository;
use employnet_entity::activity::model::CreateActivity;
use employnet_entity::activity::{Activity, ActivityStatus};
use employnet_entity::activity_log::model::ActivityLog;

use crate::context::RequestContext;

/// How many recent completions the member feed shows.
const RECENT_FEED_LIMIT: i64 = 20;

/// Manages the activity catalog.
#[derive(Debug, Clone)]
pub struct ActivityService {
    activities: Arc<ActivityRepository>,
    logs: Arc<ActivityLogRepository>,
    cache: Arc<CacheManager>,
    cache_ttl: std::time::Duration,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(
        activities: Arc<ActivityRepository>,
        logs: Arc<ActivityLogRepository>,
        cache: Arc<CacheManager>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            activities,
            logs,
            cache,
            cache_ttl: std::time::Duration::from_secs(cache_ttl_seconds),
        }
    }

    /// The member-facing catalog of active activities, served cache-aside.
    pub async fn list_active(&self) -> AppResult<Vec<Activity>> {
        let key = keys::activities_active();
        if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
            if let Ok(activities) = serde_json::from_str(&cached) {
                return Ok(activities);
            }
        }

        let activities = self.activities.find_active().await?;

        if let Err(e) = self.cache.set_json(&key, &activities, self.cache_ttl).await {
            warn!(error = %e, key, "Failed to cache active activities");
        }
        Ok(activities)
    }

    /// Fetch one activity.
    pub async fn get(&self, id: Uuid) -> AppResult<Activity> {
        self.activities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))
    }

    /// The current user's recent completions, served cache-aside.
    pub async fn recent_for_user(&self, ctx: &RequestContext) -> AppResult<Vec<ActivityLog>> {
        let key = keys::recent_activities(ctx.user_id);
        if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
            if let Ok(logs) = serde_json::from_str(&cached) {
                return Ok(logs);
            }
        }

        let logs = self
            .logs
            .find_recent_by_user(ctx.user_id, RECENT_FEED_LIMIT)
            .await?;

        if let Err(e) = self.cache.set_json(&key, &logs, self.cache_ttl).await {
            warn!(error = %e, key, "Failed to cache recent activities");
        }
        Ok(logs)
    }

    /// List all activities with pagination (admin view).
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Activity>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.activities.find_all(page).await
    }

    /// Create a new activity (admin only).
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateActivity,
    ) -> AppResult<Activity> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Activity title is required"));
        }
        if data.points < 0 {
            return Err(AppError::validation("Activity points cannot be negative"));
        }
        if !matches!(data.status, ActivityStatus::Draft | ActivityStatus::Active) {
            return Err(AppError::validation(
                "New activities must start as draft or active",
            ));
        }
        data.created_by = Some(ctx.user_id);

        let activity = self.activities.create(&data).await?;
        self.invalidate_catalog().await;
        Ok(activity)
    }

    /// Update an activity's mutable fields (admin only).
    pub async fn update(&self, ctx: &RequestContext, activity: &Activity) -> AppResult<Activity> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        let existing = self.get(activity.id).await?;
        if existing.status == ActivityStatus::Completed {
            return Err(AppError::conflict("Completed activities cannot be edited"));
        }
        if activity.points < 0 {
            return Err(AppError::validation("Activity points cannot be negative"));
        }

        let updated = self.activities.update(activity).await?;
        self.invalidate_catalog().await;
        Ok(updated)
    }

    async fn invalidate_catalog(&self) {
        let key = keys::activities_active();
        if let Err(e) = self.cache.delete(&key).await {
            warn!(error = %e, key, "Failed to invalidate activity cache");
        }
    }
}
