//! Admin reward redemption handlers.

use axum::Json;
use axum::extract::State;

use employnet_entity::reward::Reward;

use crate::dto;
use crate::dto::request::AdminRedeemRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/admin/rewards/redeem
///
/// Redeems points on behalf of the member identified by email.
pub async fn redeem(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AdminRedeemRequest>,
) -> Result<Json<ApiResponse<Reward>>, ApiError> {
    dto::validate(&req)?;
    let reward = state
        .ledger_service
        .redeem_for_email(&auth, &req.email, req.points, &req.title)
        .await?;
    Ok(Json(ApiResponse::ok(reward)))
}
