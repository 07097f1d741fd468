//! Activity catalog and completion handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use employnet_entity::activity::Activity;
use employnet_entity::activity_log::ActivityLog;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/activities
pub async fn list_active(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Activity>>>, ApiError> {
    let activities = state.activity_service.list_active().await?;
    Ok(Json(ApiResponse::ok(activities)))
}

/// GET /api/activities/recent
pub async fn recent(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ActivityLog>>>, ApiError> {
    let logs = state.activity_service.recent_for_user(&auth).await?;
    Ok(Json(ApiResponse::ok(logs)))
}

/// GET /api/activities/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Activity>>, ApiError> {
    let activity = state.activity_service.get(id).await?;
    Ok(Json(ApiResponse::ok(activity)))
}

/// POST /api/activities/{id}/complete
///
/// Member-reported completion (used by task types that finish in the
/// browser). Idempotency and assignment checks live in the ledger.
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Activity>>, ApiError> {
    let activity = state
        .ledger_service
        .complete_activity(auth.user_id, id, None)
        .await?;
    Ok(Json(ApiResponse::ok(activity)))
}
