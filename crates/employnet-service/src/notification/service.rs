//! Member-facing notification feed.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_database::repositories::notification::NotificationRepository;
use employnet_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages the notification feeds.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<NotificationRepository>) -> Self {
        Self { notifications }
    }

    /// Lists notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notifications.find_by_user(ctx.user_id, page).await
    }

    /// Lists the admin-audience feed.
    pub async fn admin_feed(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.notifications.find_admin_feed(page).await
    }

    /// Gets the unread notification count for the current user.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notifications.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read. Only the owner can mark it.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        let updated = self
            .notifications
            .mark_read(notification_id, ctx.user_id, Utc::now())
            .await?;
        if !updated {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }

    /// Marks all notifications as read for the current user.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notifications.mark_all_read(ctx.user_id, Utc::now()).await
    }
}
