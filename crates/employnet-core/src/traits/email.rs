//! Outbound email port.

use async_trait::async_trait;

use crate::result::AppResult;

/// An outbound email message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Trait for transactional email delivery.
///
/// Delivery is best-effort: callers log a failed send and move on, they
/// never retry and never let a send failure abort a committed operation.
#[async_trait]
pub trait EmailSender: Send + Sync + std::fmt::Debug + 'static {
    /// Send a single message.
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
