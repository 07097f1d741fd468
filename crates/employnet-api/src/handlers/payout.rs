//! Payout handlers (member side).

use axum::Json;
use axum::extract::{Query, State};

use employnet_core::types::pagination::PageResponse;
use employnet_database::repositories::payout::PayoutTotals;
use employnet_entity::payout::Payout;

use crate::dto;
use crate::dto::request::CreatePayoutRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/payouts
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Payout>>>, ApiError> {
    let page = params.into_page_request();
    let payouts = state.payout_service.history(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(payouts)))
}

/// POST /api/payouts
pub async fn request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePayoutRequest>,
) -> Result<Json<ApiResponse<Payout>>, ApiError> {
    dto::validate(&req)?;
    let payout = state
        .payout_service
        .request_payout(&auth, req.amount_cents)
        .await?;
    Ok(Json(ApiResponse::ok(payout)))
}

/// GET /api/payouts/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PayoutTotals>>, ApiError> {
    let totals = state.stats_service.payout_stats_for_user(&auth).await?;
    Ok(Json(ApiResponse::ok(totals)))
}
