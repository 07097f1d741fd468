//! Admin notification feed handlers.

use axum::Json;
use axum::extract::{Query, State};

use employnet_core::types::pagination::PageResponse;
use employnet_entity::notification::Notification;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/notifications
pub async fn feed(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let page = params.into_page_request();
    let notifications = state.notification_service.admin_feed(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}
