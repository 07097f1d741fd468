//! Health and readiness handlers.

use axum::Json;
use axum::extract::State;

use employnet_core::traits::cache::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse, ReadyResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/ready
///
/// Probes the database and the cache. Always answers 200; a degraded
/// dependency shows up in the body so orchestration can decide.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<ReadyResponse>> {
    let database_ok = state.db.health_check().await.unwrap_or(false);
    let cache_ok = state.cache.health_check().await.unwrap_or(false);

    let status = if database_ok && cache_ok {
        "ok"
    } else {
        "degraded"
    };

    Json(ApiResponse::ok(ReadyResponse {
        status: status.to_string(),
        database: probe_label(database_ok),
        cache: probe_label(cache_ok),
    }))
}

fn probe_label(ok: bool) -> String {
    if ok { "connected" } else { "unavailable" }.to_string()
}
