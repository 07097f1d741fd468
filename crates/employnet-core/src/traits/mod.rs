//! Trait definitions for pluggable infrastructure.

pub mod cache;
pub mod email;
pub mod realtime;

pub use cache::CacheProvider;
pub use email::EmailSender;
pub use realtime::RealtimePublisher;
