//! Verification request workflow.
//!
//! Members ask for verification, an admin approves with a session URL,
//! and the identity integration reports completion. Status only moves
//! forward: waiting, then ready, then completed.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use employnet_core::error::{AppError, ErrorKind};
use employnet_core::events::{DomainEvent, EventPayload};
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_database::repositories::activity::ActivityRepository;
use employnet_database::repositories::user::UserRepository;
use employnet_database::repositories::verification::VerificationRepository;
use employnet_entity::activity::ActivityType;
use employnet_entity::notification::model::CreateNotification;
use employnet_entity::verification::model::CreateVerificationRequest;
use employnet_entity::verification::{VerificationAction, VerificationRequest, VerificationStatus};

use crate::context::RequestContext;
use crate::ledger::LedgerService;
use crate::notification::NotificationDispatcher;

/// Verification step recorded on the user row once verified.
const VERIFIED_STEP: i32 = 1;

/// Drives verification requests through their workflow.
#[derive(Debug, Clone)]
pub struct VerificationService {
    verifications: Arc<VerificationRepository>,
    activities: Arc<ActivityRepository>,
    users: Arc<UserRepository>,
    ledger: Arc<LedgerService>,
    dispatcher: Arc<NotificationDispatcher>,
}

impl VerificationService {
    /// Creates a new verification service.
    pub fn new(
        verifications: Arc<VerificationRepository>,
        activities: Arc<ActivityRepository>,
        users: Arc<UserRepository>,
        ledger: Arc<LedgerService>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            verifications,
            activities,
            users,
            ledger,
            dispatcher,
        }
    }

    /// Open a verification request for the current user.
    ///
    /// A user can have at most one request in `waiting`; a second create
    /// while one is open gets a Conflict.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        activity_id: Uuid,
    ) -> AppResult<VerificationRequest> {
        let activity = self
            .activities
            .find_by_id(activity_id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity not found"))?;
        if activity.activity_type != ActivityType::Verification {
            return Err(AppError::validation(
                "Activity is not a verification activity",
            ));
        }

        if self
            .verifications
            .find_by_user_and_status(ctx.user_id, VerificationStatus::Waiting)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A verification request is already waiting",
            ));
        }

        let request = self
            .verifications
            .create(&CreateVerificationRequest {
                user_id: ctx.user_id,
                activity_id,
            })
            .await?;

        info!(user_id = %ctx.user_id, request_id = %request.id, "Verification requested");

        self.dispatcher
            .notify(
                Some(ctx.user_id),
                CreateNotification::for_admins(
                    "verification_requested",
                    "New verification request",
                    format!("{} requested identity verification", ctx.email),
                ),
            )
            .await;
        self.dispatcher
            .email_admins(
                "New verification request",
                format!(
                    "{} requested identity verification. Request ID: {}",
                    ctx.email, request.id
                ),
            )
            .await;

        Ok(request)
    }

    /// Approve a waiting request, attaching the session URL (admin only).
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        verification_url: &str,
    ) -> AppResult<VerificationRequest> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        if verification_url.trim().is_empty() {
            return Err(AppError::validation("Verification URL is required"));
        }

        let request = self
            .verifications
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Verification request not found"))?;
        let next = request.status.apply(VerificationAction::Approve)?;
        let member = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let updated = self
            .verifications
            .transition(
                request_id,
                request.status,
                next,
                Some(verification_url),
                None,
            )
            .await?
            .ok_or_else(|| {
                AppError::conflict("Verification request changed status concurrently")
            })?;

        info!(%request_id, "Verification request approved");

        self.dispatcher
            .notify(
                Some(ctx.user_id),
                CreateNotification::for_member(
                    updated.user_id,
                    "verification_ready",
                    "Verification ready",
                    "Your identity verification session is ready",
                ),
            )
            .await;
        self.dispatcher
            .email_member(
                member.email,
                "Your identity verification session is ready",
                format!(
                    "Your verification request was approved. Complete your identity \
                     verification session here: {verification_url}"
                ),
            )
            .await;
        self.publish_update(Some(ctx.user_id), &updated).await;

        Ok(updated)
    }

    /// Record a completed verification session.
    ///
    /// Credits the linked activity through the ledger, flips the user's
    /// verification step, and marks the request completed. The status
    /// transition runs last: a transient failure before it leaves the
    /// request in `ready`, so a retry can still deliver the credit. A
    /// Conflict from the ledger means a prior attempt already credited
    /// the activity, and the transition proceeds.
    pub async fn complete(
        &self,
        actor_id: Option<Uuid>,
        request_id: Uuid,
    ) -> AppResult<VerificationRequest> {
        let request = self
            .verifications
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Verification request not found"))?;
        let next = request.status.apply(VerificationAction::Complete)?;

        match self
            .ledger
            .complete_activity(request.user_id, request.activity_id, None)
            .await
        {
            Ok(_) => {}
            Err(e) if e.kind == ErrorKind::Conflict => {
                info!(%request_id, "Activity already credited, finishing transition");
            }
            Err(e) => return Err(e),
        }
        self.users
            .update_verification_step(request.user_id, VERIFIED_STEP)
            .await?;

        let updated = self
            .verifications
            .transition(request_id, request.status, next, None, Some(Utc::now()))
            .await?
            .ok_or_else(|| {
                AppError::conflict("Verification request changed status concurrently")
            })?;

        info!(%request_id, user_id = %updated.user_id, "Verification completed");

        self.publish_update(actor_id, &updated).await;

        Ok(updated)
    }

    /// Complete a request on behalf of the current user.
    ///
    /// Members can only complete their own request; admins can complete
    /// any.
    pub async fn complete_for(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> AppResult<VerificationRequest> {
        if !ctx.is_admin() {
            let request = self
                .verifications
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| AppError::not_found("Verification request not found"))?;
            if request.user_id != ctx.user_id {
                return Err(AppError::authorization(
                    "Verification request belongs to another user",
                ));
            }
        }
        self.complete(Some(ctx.user_id), request_id).await
    }

    /// The current user's open request (waiting or ready), if any.
    pub async fn current_for_user(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<Option<VerificationRequest>> {
        if let Some(waiting) = self
            .verifications
            .find_by_user_and_status(ctx.user_id, VerificationStatus::Waiting)
            .await?
        {
            return Ok(Some(waiting));
        }
        self.verifications
            .find_by_user_and_status(ctx.user_id, VerificationStatus::Ready)
            .await
    }

    /// List all requests, optionally filtered by status (admin view).
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        status: Option<VerificationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<VerificationRequest>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.verifications.find_all(status, page).await
    }

    async fn publish_update(&self, actor_id: Option<Uuid>, request: &VerificationRequest) {
        let event = DomainEvent::new(
            actor_id,
            EventPayload::VerificationUpdated {
                user_id: request.user_id,
                request_id: request.id,
                status: request.status.to_string(),
            },
        );
        self.dispatcher.publish_to_user(request.user_id, &event).await;
        self.dispatcher.publish_to_admins(&event).await;
    }
}
