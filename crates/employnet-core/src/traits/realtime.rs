//! Real-time publish port.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Trait for best-effort event fan-out to connected clients.
///
/// Delivery is eventual: subscribers may miss events (clients fall back
/// to interval polling), and publish failures are logged, not retried.
#[async_trait]
pub trait RealtimePublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Publish a domain event to a channel.
    async fn publish(&self, channel: &str, event: &DomainEvent) -> AppResult<()>;
}
