//! Reward redemption handlers.

use axum::Json;
use axum::extract::State;

use employnet_entity::reward::Reward;

use crate::dto;
use crate::dto::request::RedeemRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/rewards/redeem
pub async fn redeem(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RedeemRequest>,
) -> Result<Json<ApiResponse<Reward>>, ApiError> {
    dto::validate(&req)?;
    let reward = state
        .ledger_service
        .redeem(&auth, req.points, &req.title)
        .await?;
    Ok(Json(ApiResponse::ok(reward)))
}
