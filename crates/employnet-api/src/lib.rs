//! # employnet-api
//!
//! The Employ-Net HTTP surface: an axum router over the service layer,
//! bearer-token extractors, webhook receivers, and the wiring that
//! assembles repositories, services, and background jobs into a running
//! server.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
