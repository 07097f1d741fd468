//! Post-commit fan-out of notifications, email, and realtime events.
//!
//! Everything here is best-effort. The originating database transaction
//! has already committed by the time the dispatcher runs, so a failed
//! email or publish is logged at warn and swallowed; it must never
//! surface as an error on the request that caused it.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use employnet_core::events::{DomainEvent, EventPayload};
use employnet_core::traits::email::{EmailMessage, EmailSender};
use employnet_core::traits::realtime::RealtimePublisher;
use employnet_database::repositories::notification::NotificationRepository;
use employnet_entity::notification::model::{CreateNotification, Notification};
use employnet_realtime::channels;

/// Dispatches notifications and events after a transaction commits.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    notifications: Arc<NotificationRepository>,
    email: Arc<dyn EmailSender>,
    realtime: Arc<dyn RealtimePublisher>,
    channel_prefix: String,
    admin_inbox: String,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(
        notifications: Arc<NotificationRepository>,
        email: Arc<dyn EmailSender>,
        realtime: Arc<dyn RealtimePublisher>,
        channel_prefix: String,
        admin_inbox: String,
    ) -> Self {
        Self {
            notifications,
            email,
            realtime,
            channel_prefix,
            admin_inbox,
        }
    }

    /// Persist a notification and announce it on the matching channel.
    pub async fn notify(&self, actor_id: Option<Uuid>, data: CreateNotification) {
        let notification = match self.notifications.create(&data).await {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, event_type = %data.event_type, "Failed to persist notification");
                return;
            }
        };

        let event = DomainEvent::new(
            actor_id,
            EventPayload::NotificationCreated {
                notification_id: notification.id,
                user_id: notification.user_id,
                event_type: notification.event_type.clone(),
            },
        );
        self.publish_for(&notification, &event).await;
    }

    /// Publish an already-built domain event on a user's channel.
    pub async fn publish_to_user(&self, user_id: Uuid, event: &DomainEvent) {
        let channel = channels::user_channel(&self.channel_prefix, user_id);
        if let Err(e) = self.realtime.publish(&channel, event).await {
            warn!(error = %e, %channel, "Failed to publish event");
        }
    }

    /// Publish an already-built domain event on the admin channel.
    pub async fn publish_to_admins(&self, event: &DomainEvent) {
        let channel = channels::admin_channel(&self.channel_prefix);
        if let Err(e) = self.realtime.publish(&channel, event).await {
            warn!(error = %e, %channel, "Failed to publish event");
        }
    }

    /// Send a best-effort email to the admin inbox.
    pub async fn email_admins(&self, subject: impl Into<String>, body: impl Into<String>) {
        let message = EmailMessage {
            to: self.admin_inbox.clone(),
            subject: subject.into(),
            body: body.into(),
        };
        if let Err(e) = self.email.send(&message).await {
            warn!(error = %e, subject = %message.subject, "Failed to send admin email");
        }
    }

    /// Send a best-effort email to a member.
    pub async fn email_member(
        &self,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) {
        let message = EmailMessage {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        };
        if let Err(e) = self.email.send(&message).await {
            warn!(error = %e, subject = %message.subject, "Failed to send member email");
        }
    }

    async fn publish_for(&self, notification: &Notification, event: &DomainEvent) {
        match notification.user_id {
            Some(user_id) => self.publish_to_user(user_id, event).await,
            None => self.publish_to_admins(event).await,
        }
    }
}
