//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use employnet_core::types::pagination::PageResponse;
use employnet_entity::user::{User, UserRole};

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<User>>>, ApiError> {
    let page = params.into_page_request();
    let users = state.user_service.list_all(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/admin/users/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let role: UserRole = req.role.parse()?;
    let user = state.user_service.get(&auth, id).await?;
    state.user_service.sync_role(&user.subject, role).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Role updated"))))
}
