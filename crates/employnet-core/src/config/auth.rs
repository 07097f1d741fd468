//! Identity provider and token verification configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// Employ-Net does not manage credentials itself; it verifies bearer
/// tokens issued by the managed identity provider and resolves roles
/// through the provider's user API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify provider-issued JWTs (HS256).
    pub jwt_secret: String,
    /// Expected token issuer.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Expected token audience (empty = not validated).
    #[serde(default)]
    pub audience: String,
    /// Clock-skew leeway in seconds when validating `exp`/`nbf`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Base URL of the identity provider's user API.
    #[serde(default = "default_provider_url")]
    pub provider_base_url: String,
    /// API key for the identity provider's management API.
    #[serde(default)]
    pub provider_api_key: String,
    /// Timeout in seconds for identity provider calls.
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_seconds: u64,
}

fn default_issuer() -> String {
    "https://auth.employ-net.example".to_string()
}

fn default_leeway() -> u64 {
    30
}

fn default_provider_url() -> String {
    "https://api.auth.employ-net.example/v1".to_string()
}

fn default_provider_timeout() -> u64 {
    5
}
