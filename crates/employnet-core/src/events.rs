//! Domain events emitted by Employ-Net operations.
//!
//! Events are published through the real-time fan-out after the backing
//! database transaction commits. Delivery is best-effort; clients that
//! miss an event pick up the change through interval polling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// An activity was completed and points were credited.
    ActivityCompleted {
        /// The user who completed the activity.
        user_id: Uuid,
        /// The completed activity.
        activity_id: Uuid,
        /// Points credited.
        points: i64,
    },
    /// Points were redeemed for a reward.
    RewardRedeemed {
        /// The redeeming user.
        user_id: Uuid,
        /// Points debited.
        points: i64,
        /// Reward title.
        title: String,
    },
    /// A payout was requested and points were debited.
    PayoutRequested {
        /// The requesting user.
        user_id: Uuid,
        /// The payout record.
        payout_id: Uuid,
        /// Requested amount in cents.
        amount_cents: i64,
    },
    /// A payout moved to a new status.
    PayoutStatusChanged {
        /// The payout owner.
        user_id: Uuid,
        /// The payout record.
        payout_id: Uuid,
        /// The resulting status.
        status: String,
        /// Points refunded (non-zero only on rejection).
        refunded_points: i64,
    },
    /// A verification request changed status.
    VerificationUpdated {
        /// The requesting user.
        user_id: Uuid,
        /// The verification request.
        request_id: Uuid,
        /// The resulting status.
        status: String,
    },
    /// A notification was created for a user or the admin audience.
    NotificationCreated {
        /// The notification record.
        notification_id: Uuid,
        /// Recipient user (None for admin-audience broadcasts).
        user_id: Option<Uuid>,
        /// Notification event type.
        event_type: String,
    },
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let event = DomainEvent::new(
            None,
            EventPayload::ActivityCompleted {
                user_id: Uuid::nil(),
                activity_id: Uuid::nil(),
                points: 200,
            },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["payload"]["type"], "activity_completed");
        assert_eq!(json["payload"]["points"], 200);
    }
}
