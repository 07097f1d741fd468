//! Admin platform statistics handlers.

use axum::Json;
use axum::extract::State;

use employnet_database::repositories::payout::PayoutTotals;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn platform(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<PayoutTotals>>, ApiError> {
    let totals = state.stats_service.payout_stats(&auth).await?;
    Ok(Json(ApiResponse::ok(totals)))
}
