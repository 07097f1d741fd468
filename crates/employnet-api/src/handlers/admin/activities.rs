//! Admin activity catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use employnet_core::types::pagination::PageResponse;
use employnet_entity::activity::{Activity, ActivityStatus, CreateActivity};

use crate::dto;
use crate::dto::request::{CreateActivityRequest, UpdateActivityRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/activities
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Activity>>>, ApiError> {
    let page = params.into_page_request();
    let activities = state.activity_service.list_all(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(activities)))
}

/// POST /api/admin/activities
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateActivityRequest>,
) -> Result<Json<ApiResponse<Activity>>, ApiError> {
    dto::validate(&req)?;
    let data = CreateActivity {
        title: req.title,
        description: req.description,
        activity_type: req.activity_type,
        points: req.points,
        status: req.status.unwrap_or(ActivityStatus::Draft),
        user_id: req.user_id,
        created_by: None,
        metadata: req.metadata,
    };
    let activity = state.activity_service.create(&auth, data).await?;
    Ok(Json(ApiResponse::ok(activity)))
}

/// PUT /api/admin/activities/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateActivityRequest>,
) -> Result<Json<ApiResponse<Activity>>, ApiError> {
    let mut activity = state.activity_service.get(id).await?;
    if let Some(title) = req.title {
        activity.title = title;
    }
    if let Some(description) = req.description {
        activity.description = Some(description);
    }
    if let Some(points) = req.points {
        activity.points = points;
    }
    if let Some(status) = req.status {
        activity.status = status;
    }
    if let Some(metadata) = req.metadata {
        activity.metadata = Some(metadata);
    }
    let updated = state.activity_service.update(&auth, &activity).await?;
    Ok(Json(ApiResponse::ok(updated)))
}
