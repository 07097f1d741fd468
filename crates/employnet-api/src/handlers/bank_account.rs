//! Bank account handlers.

use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use employnet_entity::bank_account::{BankAccount, UpsertBankAccount};

use crate::dto;
use crate::dto::request::UpsertBankAccountRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/bank-account
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Option<BankAccount>>>, ApiError> {
    let account = state.bank_account_service.get(&auth).await?;
    Ok(Json(ApiResponse::ok(account)))
}

/// PUT /api/bank-account
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpsertBankAccountRequest>,
) -> Result<Json<ApiResponse<BankAccount>>, ApiError> {
    dto::validate(&req)?;
    // The service pins the owner to the caller regardless of this value.
    let data = UpsertBankAccount {
        user_id: Uuid::nil(),
        account_holder: req.account_holder,
        bank_name: req.bank_name,
        account_number: req.account_number,
        routing_number: req.routing_number,
    };
    let account = state.bank_account_service.upsert(&auth, data).await?;
    Ok(Json(ApiResponse::ok(account)))
}
