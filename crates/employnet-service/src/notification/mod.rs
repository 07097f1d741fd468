//! Notification services: member-facing feed plus the dispatcher that
//! fans out committed domain changes.

pub mod dispatch;
pub mod service;

pub use dispatch::NotificationDispatcher;
pub use service::NotificationService;
