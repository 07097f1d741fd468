//! Redis pub/sub publisher for multi-node deployments.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tracing::{debug, info};

use employnet_core::config::realtime::RealtimeConfig;
use employnet_core::error::{AppError, ErrorKind};
use employnet_core::events::DomainEvent;
use employnet_core::result::AppResult;
use employnet_core::traits::realtime::RealtimePublisher;

/// Redis-backed publisher for cross-node event relay.
#[derive(Debug, Clone)]
pub struct RedisPublisher {
    /// Reconnecting connection manager.
    conn: ConnectionManager,
}

impl RedisPublisher {
    /// Connect to Redis using the configured pub/sub URL.
    pub async fn connect(config: &RealtimeConfig) -> AppResult<Self> {
        let client = redis::Client::open(config.redis_url.as_str()).map_err(|e| {
            AppError::with_source(ErrorKind::Cache, "Failed to create Redis client", e)
        })?;

        let conn = ConnectionManager::new(client).await.map_err(|e| {
            AppError::with_source(ErrorKind::Cache, "Failed to connect to Redis pub/sub", e)
        })?;

        info!("Connected to Redis for event fan-out");
        Ok(Self { conn })
    }
}

#[async_trait]
impl RealtimePublisher for RedisPublisher {
    async fn publish(&self, channel: &str, event: &DomainEvent) -> AppResult<()> {
        let payload = serde_json::to_string(event)?;
        let mut conn = self.conn.clone();

        let receivers: i64 = redis::cmd("PUBLISH")
            .arg(channel)
            .arg(&payload)
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Cache, "Redis PUBLISH failed", e))?;

        debug!(channel, receivers, event_id = %event.id, "Published event");
        Ok(())
    }
}
