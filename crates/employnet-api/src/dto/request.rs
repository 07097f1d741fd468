//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use employnet_entity::activity::{ActivityStatus, ActivityType};
use employnet_entity::payout::PayoutStatus;
use employnet_entity::verification::VerificationStatus;

/// Body for `POST /rewards/redeem`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RedeemRequest {
    /// Points to debit.
    #[validate(range(min = 1))]
    pub points: i64,
    /// What the points were redeemed for.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// Body for `POST /admin/rewards/redeem` (on behalf of a member).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminRedeemRequest {
    /// The member's email address.
    #[validate(email)]
    pub email: String,
    /// Points to debit.
    #[validate(range(min = 1))]
    pub points: i64,
    /// What the points were redeemed for.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

/// Body for `POST /payouts`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePayoutRequest {
    /// Requested amount in integer cents (1 point == 1 cent).
    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

/// Body for `PUT /admin/payouts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayoutRequest {
    /// Lifecycle action: `process`, `complete`, or `reject`.
    pub action: String,
    /// Optional admin notes recorded on the payout.
    pub notes: Option<String>,
}

/// Body for `PUT /bank-account`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertBankAccountRequest {
    /// Name on the account.
    #[validate(length(min = 1, max = 255))]
    pub account_holder: String,
    /// Bank name.
    #[validate(length(min = 1, max = 255))]
    pub bank_name: String,
    /// Full account number; only the last four digits are stored.
    #[validate(length(min = 4, max = 34))]
    pub account_number: String,
    /// Nine-digit ABA routing number.
    #[validate(length(min = 9, max = 11))]
    pub routing_number: String,
}

/// Body for `POST /admin/activities`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateActivityRequest {
    /// Title shown to members.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// The kind of task.
    pub activity_type: ActivityType,
    /// Points credited on completion.
    #[validate(range(min = 0))]
    pub points: i64,
    /// Initial status; defaults to `draft`.
    pub status: Option<ActivityStatus>,
    /// Assigned user, if instantiated per-member.
    pub user_id: Option<Uuid>,
    /// Integration metadata.
    pub metadata: Option<Value>,
}

/// Body for `PUT /admin/activities/{id}`. Absent fields are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateActivityRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New point value.
    pub points: Option<i64>,
    /// New status.
    pub status: Option<ActivityStatus>,
    /// New integration metadata.
    pub metadata: Option<Value>,
}

/// Body for `POST /verification-requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVerificationRequestBody {
    /// The verification activity to complete.
    pub activity_id: Uuid,
}

/// Body for `PUT /admin/verification-requests/{id}/approve`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApproveVerificationRequest {
    /// Session URL the member opens to verify.
    #[validate(url)]
    pub verification_url: String,
}

/// Body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// New role: `admin` or `member`.
    pub role: String,
}

/// Status filter for admin payout listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutStatusFilter {
    /// Restrict the listing to one status.
    pub status: Option<PayoutStatus>,
}

/// Status filter for admin verification listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatusFilter {
    /// Restrict the listing to one status.
    pub status: Option<VerificationStatus>,
}

/// Delivery body shared by the video and survey webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskWebhookPayload {
    /// Integration event name (`video.watched`, `survey.submitted`, ...).
    pub event: String,
    /// The member who performed the task.
    pub user_id: Uuid,
    /// The activity being completed.
    pub activity_id: Uuid,
    /// Integration-specific detail stored on the activity log.
    pub metadata: Option<Value>,
}

/// Delivery body for the identity provider's lifecycle webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum IdentityWebhookPayload {
    /// A user was created in the provider.
    #[serde(rename = "user.created")]
    UserCreated {
        /// Provider subject.
        subject: String,
        /// Email address.
        email: String,
        /// Display name.
        name: Option<String>,
        /// Assigned role (`admin` or `member`).
        role: Option<String>,
    },
    /// A user's role changed in the provider.
    #[serde(rename = "user.role_changed")]
    UserRoleChanged {
        /// Provider subject.
        subject: String,
        /// New role.
        role: String,
    },
    /// A user was deleted in the provider.
    #[serde(rename = "user.deleted")]
    UserDeleted {
        /// Provider subject.
        subject: String,
    },
    /// A verification session finished.
    #[serde(rename = "verification.completed")]
    VerificationCompleted {
        /// The verification request the session belongs to.
        request_id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn redeem_request_rejects_non_positive_points() {
        let req = RedeemRequest {
            points: 0,
            title: "Gift card".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn identity_payload_parses_tagged_events() {
        let body = r#"{"event":"user.deleted","subject":"usr_9"}"#;
        let parsed: IdentityWebhookPayload = serde_json::from_str(body).unwrap();
        assert!(matches!(
            parsed,
            IdentityWebhookPayload::UserDeleted { ref subject } if subject == "usr_9"
        ));
    }

    #[test]
    fn verification_completed_parses() {
        let id = Uuid::new_v4();
        let body = format!(r#"{{"event":"verification.completed","request_id":"{id}"}}"#);
        let parsed: IdentityWebhookPayload = serde_json::from_str(&body).unwrap();
        assert!(matches!(
            parsed,
            IdentityWebhookPayload::VerificationCompleted { request_id } if request_id == id
        ));
    }
}
