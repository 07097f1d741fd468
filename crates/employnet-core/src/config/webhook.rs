//! Inbound webhook verification configuration.

use serde::{Deserialize, Serialize};

/// Webhook signature verification configuration.
///
/// Each inbound integration signs deliveries with its own shared secret.
/// Deliveries with a missing, invalid, or stale signature are rejected
/// before the payload is parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Signing secret for the video-hosting integration.
    #[serde(default)]
    pub video_secret: String,
    /// Signing secret for the survey-forms integration.
    #[serde(default)]
    pub survey_secret: String,
    /// Signing secret for identity-provider lifecycle events.
    #[serde(default)]
    pub identity_secret: String,
    /// Maximum accepted clock skew for the signed timestamp, in seconds.
    #[serde(default = "default_tolerance")]
    pub timestamp_tolerance_seconds: i64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            video_secret: String::new(),
            survey_secret: String::new(),
            identity_secret: String::new(),
            timestamp_tolerance_seconds: default_tolerance(),
        }
    }
}

fn default_tolerance() -> i64 {
    300
}
