//! Route definitions for the Employ-Net HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(activity_routes())
        .merge(reward_routes())
        .merge(payout_routes())
        .merge(bank_account_routes())
        .merge(verification_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        .merge(webhook_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::me))
        .route("/users/me/stats", get(handlers::user::my_stats))
}

/// Activity catalog and completion
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(handlers::activity::list_active))
        .route("/activities/recent", get(handlers::activity::recent))
        .route("/activities/{id}", get(handlers::activity::get))
        .route(
            "/activities/{id}/complete",
            post(handlers::activity::complete),
        )
}

/// Reward redemption
fn reward_routes() -> Router<AppState> {
    Router::new().route("/rewards/redeem", post(handlers::reward::redeem))
}

/// Payout request and history
fn payout_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/payouts",
            get(handlers::payout::history).post(handlers::payout::request),
        )
        .route("/payouts/stats", get(handlers::payout::stats))
}

/// Bank account linking
fn bank_account_routes() -> Router<AppState> {
    Router::new().route(
        "/bank-account",
        get(handlers::bank_account::get).put(handlers::bank_account::upsert),
    )
}

/// Verification request workflow (member side)
fn verification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/verification-requests",
            post(handlers::verification::create),
        )
        .route(
            "/verification-requests/current",
            get(handlers::verification::current),
        )
        .route(
            "/verification-requests/{id}/complete",
            post(handlers::verification::complete),
        )
}

/// Notification feed
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/admin/users", get(handlers::admin::users::list))
        .route("/admin/users/{id}", get(handlers::admin::users::get))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        // Activity catalog
        .route(
            "/admin/activities",
            get(handlers::admin::activities::list).post(handlers::admin::activities::create),
        )
        .route(
            "/admin/activities/{id}",
            put(handlers::admin::activities::update),
        )
        // Payout processing
        .route("/admin/payouts", get(handlers::admin::payouts::list))
        .route(
            "/admin/payouts/{id}",
            put(handlers::admin::payouts::process),
        )
        // Verification workflow
        .route(
            "/admin/verification-requests",
            get(handlers::admin::verifications::list),
        )
        .route(
            "/admin/verification-requests/{id}/approve",
            put(handlers::admin::verifications::approve),
        )
        .route(
            "/admin/verification-requests/{id}/complete",
            put(handlers::admin::verifications::complete),
        )
        // Rewards on behalf of members
        .route(
            "/admin/rewards/redeem",
            post(handlers::admin::rewards::redeem),
        )
        // Platform stats and admin feed
        .route("/admin/stats", get(handlers::admin::stats::platform))
        .route(
            "/admin/notifications",
            get(handlers::admin::notifications::feed),
        )
}

/// Webhook receivers (signature-verified, no bearer auth)
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/webhooks/video", post(handlers::webhook::video))
        .route("/webhooks/survey", post(handlers::webhook::survey))
        .route("/webhooks/identity", post(handlers::webhook::identity))
}
