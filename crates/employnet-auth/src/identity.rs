//! Identity provider client for role resolution.
//!
//! Admin checks are resolved against the provider at call time rather
//! than trusting a role claim baked into a token that may be hours old.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use employnet_core::config::auth::AuthConfig;
use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_entity::user::UserRole;

/// Resolves a user's current role from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the current role for the given provider subject.
    async fn fetch_role(&self, subject: &str) -> AppResult<UserRole>;
}

/// Role payload returned by the provider's user API.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    role: String,
}

/// HTTP client against the managed identity provider's user API.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpIdentityProvider {
    /// Create a provider client from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build identity provider client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.provider_base_url.trim_end_matches('/').to_string(),
            api_key: config.provider_api_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_role(&self, subject: &str) -> AppResult<UserRole> {
        let url = format!("{}/users/{}", self.base_url, subject);
        debug!(%subject, "Fetching role from identity provider");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Identity provider request failed",
                    e,
                )
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::not_found("User not known to identity provider"));
        }
        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Identity provider returned status {}",
                response.status()
            )));
        }

        let user: ProviderUser = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to parse identity provider response",
                e,
            )
        })?;

        UserRole::from_str(&user.role)
            .map_err(|_| AppError::external_service(format!("Unknown role '{}'", user.role)))
    }
}

/// Fixed-role provider for tests and local development.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    role: UserRole,
}

impl StaticIdentityProvider {
    /// Create a provider that always returns the given role.
    pub fn new(role: UserRole) -> Self {
        Self { role }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn fetch_role(&self, _subject: &str) -> AppResult<UserRole> {
        Ok(self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_configured_role() {
        let provider = StaticIdentityProvider::new(UserRole::Admin);
        let role = provider.fetch_role("auth0|whoever").await.unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
