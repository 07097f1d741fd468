//! Inbound webhook receivers.
//!
//! Webhooks carry no bearer token; trust comes from the HMAC signature
//! over `{id}.{timestamp}.{body}` in the delivery headers. The body is
//! only parsed after the signature checks out.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use tracing::info;

use employnet_auth::webhook::WebhookVerifier;
use employnet_core::error::{AppError, ErrorKind};
use employnet_entity::user::{CreateUser, UserRole};

use crate::dto::request::{IdentityWebhookPayload, TaskWebhookPayload};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/webhooks/video
pub async fn video(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    verify_delivery(&state.video_webhooks, &headers, &body)?;
    complete_task(&state, &body, "video").await
}

/// POST /api/webhooks/survey
pub async fn survey(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    verify_delivery(&state.survey_webhooks, &headers, &body)?;
    complete_task(&state, &body, "survey").await
}

/// POST /api/webhooks/identity
pub async fn identity(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    verify_delivery(&state.identity_webhooks, &headers, &body)?;

    let payload: IdentityWebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| AppError::validation(format!("Invalid webhook body: {e}")))?;

    match payload {
        IdentityWebhookPayload::UserCreated {
            subject,
            email,
            name,
            role,
        } => {
            let role = match role {
                Some(r) => r.parse::<UserRole>()?,
                None => UserRole::Member,
            };
            state
                .user_service
                .provision(CreateUser {
                    subject,
                    email,
                    display_name: name,
                    role,
                })
                .await?;
        }
        IdentityWebhookPayload::UserRoleChanged { subject, role } => {
            let role = role.parse::<UserRole>()?;
            state.user_service.sync_role(&subject, role).await?;
        }
        IdentityWebhookPayload::UserDeleted { subject } => {
            state.user_service.deactivate(&subject).await?;
        }
        IdentityWebhookPayload::VerificationCompleted { request_id } => {
            // Redelivered completions hit the terminal-state guard; the
            // provider must not keep retrying a delivery that already
            // landed.
            match state.verification_service.complete(None, request_id).await {
                Ok(_) => {}
                Err(e) if e.kind == ErrorKind::Conflict => {
                    info!(%request_id, "Verification already completed, ignoring redelivery");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(Json(ApiResponse::ok(MessageResponse::new("Processed"))))
}

/// Check the signature headers on a delivery before trusting the body.
fn verify_delivery(
    verifier: &WebhookVerifier,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), ApiError> {
    let id = header_value(headers, "webhook-id")?;
    let timestamp = header_value(headers, "webhook-timestamp")?;
    let signature = header_value(headers, "webhook-signature")?;
    verifier.verify(id, timestamp, signature, body)?;
    Ok(())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication(format!("Missing {name} header")))
}

/// Credit a task completion reported by an integration.
async fn complete_task(
    state: &AppState,
    body: &[u8],
    source: &str,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let payload: TaskWebhookPayload = serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Invalid webhook body: {e}")))?;

    info!(
        source,
        event = %payload.event,
        user_id = %payload.user_id,
        activity_id = %payload.activity_id,
        "Webhook delivery accepted"
    );

    match state
        .ledger_service
        .complete_activity(payload.user_id, payload.activity_id, payload.metadata)
        .await
    {
        Ok(_) => Ok(Json(ApiResponse::ok(MessageResponse::new("Completed")))),
        // A doubled delivery finds the activity already completed; answer
        // 200 so the integration stops retrying.
        Err(e) if e.kind == ErrorKind::Conflict => Ok(Json(ApiResponse::ok(
            MessageResponse::new("Already completed"),
        ))),
        Err(e) => Err(e.into()),
    }
}
