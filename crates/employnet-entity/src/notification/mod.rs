//! Notification domain entities.

pub mod audience;
pub mod model;

pub use audience::NotificationAudience;
pub use model::{CreateNotification, Notification};
