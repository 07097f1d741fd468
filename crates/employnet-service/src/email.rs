//! Transactional email delivery over an HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use employnet_core::config::email::EmailConfig;
use employnet_core::error::{AppError, ErrorKind};
use employnet_core::result::AppResult;
use employnet_core::traits::email::{EmailMessage, EmailSender};

/// Email sender backed by an HTTP transactional-email API.
#[derive(Debug, Clone)]
pub struct HttpEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpEmailSender {
    /// Create a sender from email configuration.
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build email client", e)
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let payload = serde_json::json!({
            "from": self.from_address,
            "to": message.to,
            "subject": message.subject,
            "text": message.body,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Email API request failed", e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Email API returned status {}",
                response.status()
            )));
        }

        debug!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}

/// No-op sender used when outbound email is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoopEmailSender;

#[async_trait]
impl EmailSender for NoopEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        debug!(to = %message.to, subject = %message.subject, "Email disabled, dropping message");
        Ok(())
    }
}

/// Build the configured email backend.
pub fn build_sender(config: &EmailConfig) -> AppResult<std::sync::Arc<dyn EmailSender>> {
    if config.enabled {
        Ok(std::sync::Arc::new(HttpEmailSender::new(config)?))
    } else {
        Ok(std::sync::Arc::new(NoopEmailSender))
    }
}
