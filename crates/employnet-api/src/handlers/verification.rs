//! Verification request handlers (member side).

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use employnet_entity::verification::VerificationRequest;

use crate::dto::request::CreateVerificationRequestBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/verification-requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateVerificationRequestBody>,
) -> Result<Json<ApiResponse<VerificationRequest>>, ApiError> {
    let request = state
        .verification_service
        .create(&auth, req.activity_id)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// GET /api/verification-requests/current
pub async fn current(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Option<VerificationRequest>>>, ApiError> {
    let request = state.verification_service.current_for_user(&auth).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/verification-requests/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VerificationRequest>>, ApiError> {
    let request = state.verification_service.complete_for(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}
