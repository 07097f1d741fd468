//! In-memory broadcast publisher for single-node deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::sync::broadcast;

use employnet_core::config::realtime::RealtimeConfig;
use employnet_core::events::DomainEvent;
use employnet_core::result::AppResult;
use employnet_core::traits::realtime::RealtimePublisher;

/// In-memory pub/sub backed by tokio broadcast channels.
#[derive(Debug)]
pub struct MemoryPublisher {
    /// Channel name to broadcast sender.
    channels: RwLock<HashMap<String, broadcast::Sender<DomainEvent>>>,
    /// Buffer size for new channels.
    buffer_size: usize,
}

impl MemoryPublisher {
    /// Create a new in-memory publisher.
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer_size: config.buffer_size,
        }
    }

    /// Subscribe to a channel, creating it on first use.
    pub async fn subscribe(&self, channel: &str) -> broadcast::Receiver<DomainEvent> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(self.buffer_size).0);
        tx.subscribe()
    }
}

#[async_trait]
impl RealtimePublisher for MemoryPublisher {
    async fn publish(&self, channel: &str, event: &DomainEvent) -> AppResult<()> {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(channel) {
            // Send fails only when no subscriber is listening.
            let _ = tx.send(event.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employnet_core::events::EventPayload;
    use uuid::Uuid;

    fn sample_event() -> DomainEvent {
        DomainEvent::new(
            Some(Uuid::nil()),
            EventPayload::ActivityCompleted {
                user_id: Uuid::nil(),
                activity_id: Uuid::nil(),
                points: 100,
            },
        )
    }

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let config = RealtimeConfig::default();
        let publisher = MemoryPublisher::new(&config);
        let mut rx = publisher.subscribe("employnet:events:admin").await;

        let event = sample_event();
        publisher
            .publish("employnet:events:admin", &event)
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.id, event.id);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_ok() {
        let config = RealtimeConfig::default();
        let publisher = MemoryPublisher::new(&config);
        publisher
            .publish("employnet:events:nobody", &sample_event())
            .await
            .unwrap();
    }
}
