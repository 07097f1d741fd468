//! Transactional email configuration.

use serde::{Deserialize, Serialize};

/// Outbound email configuration.
///
/// Email is delivered through an HTTP transactional-email API.
/// Delivery is fire-and-forget; failures are logged, never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the email API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key for the email service.
    #[serde(default)]
    pub api_key: String,
    /// From address for all outbound mail.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Admin inbox for verification-request alerts.
    #[serde(default = "default_admin_inbox")]
    pub admin_inbox: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from(),
            admin_inbox: default_admin_inbox(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.mail.employ-net.example/v1/send".to_string()
}

fn default_from() -> String {
    "no-reply@employ-net.example".to_string()
}

fn default_admin_inbox() -> String {
    "admin@employ-net.example".to_string()
}

fn default_timeout() -> u64 {
    10
}
