//! Admin verification workflow handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use employnet_core::types::pagination::PageResponse;
use employnet_entity::verification::VerificationRequest;

use crate::dto;
use crate::dto::request::{ApproveVerificationRequest, VerificationStatusFilter};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/verification-requests
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<VerificationStatusFilter>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<VerificationRequest>>>, ApiError> {
    let page = params.into_page_request();
    let requests = state
        .verification_service
        .list_all(&auth, filter.status, &page)
        .await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// PUT /api/admin/verification-requests/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ApproveVerificationRequest>,
) -> Result<Json<ApiResponse<VerificationRequest>>, ApiError> {
    dto::validate(&req)?;
    let request = state
        .verification_service
        .approve(&auth, id, &req.verification_url)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// PUT /api/admin/verification-requests/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VerificationRequest>>, ApiError> {
    let request = state.verification_service.complete_for(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}
