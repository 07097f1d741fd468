//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use employnet_entity::user::User;
use employnet_service::stats::UserStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/me/stats
pub async fn my_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserStats>>, ApiError> {
    let stats = state.stats_service.user_stats(&auth).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
