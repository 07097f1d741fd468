//! # employnet-realtime
//!
//! Best-effort fan-out of domain events to connected dashboards. Events
//! are serialized as JSON and published on per-user or audience channels;
//! clients that miss an event fall back to interval polling, so delivery
//! is never retried and failures never fail the originating request.

pub mod channels;
pub mod memory;
#[cfg(feature = "redis-pubsub")]
pub mod redis_pubsub;

use std::sync::Arc;

use tracing::info;

use employnet_core::config::realtime::RealtimeConfig;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_core::traits::realtime::RealtimePublisher;

pub use memory::MemoryPublisher;
#[cfg(feature = "redis-pubsub")]
pub use redis_pubsub::RedisPublisher;

/// Build the configured publisher backend.
pub async fn build_publisher(config: &RealtimeConfig) -> AppResult<Arc<dyn RealtimePublisher>> {
    match config.provider.as_str() {
        #[cfg(feature = "redis-pubsub")]
        "redis" => {
            info!("Initializing Redis realtime publisher");
            let publisher = RedisPublisher::connect(config).await?;
            Ok(Arc::new(publisher))
        }
        "memory" => {
            info!("Initializing in-memory realtime publisher");
            Ok(Arc::new(MemoryPublisher::new(config)))
        }
        other => Err(AppError::configuration(format!(
            "Unknown realtime provider: '{other}'. Supported: memory, redis"
        ))),
    }
}
