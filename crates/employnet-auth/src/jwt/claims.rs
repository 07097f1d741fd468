//! JWT claims structure for provider-issued access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every access token the identity provider
/// issues. The subject is the provider's stable user identifier, not a
/// local row ID; the local user row is looked up (or provisioned) by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the identity provider's stable user identifier.
    pub sub: String,
    /// Email address at the time of token issuance.
    pub email: String,
    /// Display name, if the provider has one on file.
    #[serde(default)]
    pub name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token issuer.
    pub iss: String,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
