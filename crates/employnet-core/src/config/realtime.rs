//! Real-time fan-out configuration.

use serde::{Deserialize, Serialize};

/// Real-time publish configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Publisher backend: `"memory"` or `"redis"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Redis URL for the pub/sub bridge.
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    /// Channel name prefix.
    #[serde(default = "default_channel_prefix")]
    pub channel_prefix: String,
    /// Broadcast buffer size for the in-memory publisher.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            redis_url: default_redis_url(),
            channel_prefix: default_channel_prefix(),
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_channel_prefix() -> String {
    "employnet:events".to_string()
}

fn default_buffer_size() -> usize {
    256
}
