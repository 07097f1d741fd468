//! Admin payout processing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use employnet_core::types::pagination::PageResponse;
use employnet_entity::payout::{Payout, PayoutAction};

use crate::dto::request::{PayoutStatusFilter, ProcessPayoutRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/payouts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<PayoutStatusFilter>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Payout>>>, ApiError> {
    let page = params.into_page_request();
    let payouts = state
        .payout_service
        .list_all(&auth, filter.status, &page)
        .await?;
    Ok(Json(ApiResponse::ok(payouts)))
}

/// PUT /api/admin/payouts/{id}
pub async fn process(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ProcessPayoutRequest>,
) -> Result<Json<ApiResponse<Payout>>, ApiError> {
    let action: PayoutAction = req.action.parse()?;
    let payout = state
        .payout_service
        .process_payout(&auth, id, action, req.notes.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(payout)))
}
