//! Payout request and processing lifecycle.

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use employnet_auth::IdentityProvider;
use employnet_cache::CacheManager;
use employnet_cache::keys;
use employnet_core::error::{AppError, ErrorKind};
use employnet_core::events::{DomainEvent, EventPayload};
use employnet_core::result::AppResult;
use employnet_core::traits::cache::CacheProvider;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_database::repositories::bank_account::BankAccountRepository;
use employnet_database::repositories::notification::NotificationRepository;
use employnet_database::repositories::payout::PayoutRepository;
use employnet_database::repositories::user::UserRepository;
use employnet_entity::notification::model::CreateNotification;
use employnet_entity::payout::model::CreatePayout;
use employnet_entity::payout::{Payout, PayoutAction, PayoutStatus};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Manages the payout lifecycle.
///
/// Requests debit the balance up front; a later rejection refunds the
/// same number of points in the transaction that records the rejection.
/// Terminal payouts (completed, rejected) are frozen.
#[derive(Debug, Clone)]
pub struct PayoutService {
    pool: PgPool,
    payouts: Arc<PayoutRepository>,
    bank_accounts: Arc<BankAccountRepository>,
    identity: Arc<dyn IdentityProvider>,
    cache: Arc<CacheManager>,
    cache_ttl: std::time::Duration,
    dispatcher: Arc<NotificationDispatcher>,
}

impl PayoutService {
    /// Creates a new payout service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        payouts: Arc<PayoutRepository>,
        bank_accounts: Arc<BankAccountRepository>,
        identity: Arc<dyn IdentityProvider>,
        cache: Arc<CacheManager>,
        cache_ttl_seconds: u64,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            pool,
            payouts,
            bank_accounts,
            identity,
            cache,
            cache_ttl: std::time::Duration::from_secs(cache_ttl_seconds),
            dispatcher,
        }
    }

    /// Request a payout, debiting the points up front.
    pub async fn request_payout(
        &self,
        ctx: &RequestContext,
        amount_cents: i64,
    ) -> AppResult<Payout> {
        if amount_cents <= 0 {
            return Err(AppError::validation("Payout amount must be positive"));
        }
        if !self.bank_accounts.exists_for_user(ctx.user_id).await? {
            return Err(AppError::validation("Bank account required"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let payout = PayoutRepository::create_tx(
            &mut tx,
            &CreatePayout {
                user_id: ctx.user_id,
                amount_cents,
            },
        )
        .await?;

        // 1 point per cent; a false return means the balance cannot cover it.
        let debited =
            UserRepository::debit_points_tx(&mut tx, ctx.user_id, payout.points_debited()).await?;
        if !debited {
            return Err(AppError::insufficient_balance());
        }

        let amount = format_usd(amount_cents);
        NotificationRepository::create_tx(
            &mut tx,
            &CreateNotification::for_member(
                ctx.user_id,
                "payout_requested",
                "Payout requested",
                format!("Your payout request for {amount} was received"),
            ),
        )
        .await?;
        NotificationRepository::create_tx(
            &mut tx,
            &CreateNotification::for_admins(
                "payout_requested",
                "New payout request",
                format!("{} requested a payout of {amount}", ctx.email),
            ),
        )
        .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit payout request", e)
        })?;

        info!(user_id = %ctx.user_id, payout_id = %payout.id, amount_cents, "Payout requested");

        self.invalidate_payout_caches(ctx.user_id).await;

        let event = DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::PayoutRequested {
                user_id: ctx.user_id,
                payout_id: payout.id,
                amount_cents,
            },
        );
        self.dispatcher.publish_to_user(ctx.user_id, &event).await;
        self.dispatcher.publish_to_admins(&event).await;

        Ok(payout)
    }

    /// Apply a lifecycle action to a payout (admin only).
    ///
    /// The admin role is re-checked against the identity provider at call
    /// time; a stale token role is not enough to move money.
    pub async fn process_payout(
        &self,
        ctx: &RequestContext,
        payout_id: Uuid,
        action: PayoutAction,
        notes: Option<&str>,
    ) -> AppResult<Payout> {
        let current_role = self.identity.fetch_role(&ctx.subject).await?;
        if !current_role.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let payout = PayoutRepository::find_for_update_tx(&mut tx, payout_id)
            .await?
            .ok_or_else(|| AppError::not_found("Payout not found"))?;

        let new_status = payout.status.apply(action)?;
        let updated = PayoutRepository::update_status_tx(
            &mut tx,
            payout_id,
            new_status,
            notes,
            ctx.user_id,
            Utc::now(),
        )
        .await?;

        let refunded_points = if new_status == PayoutStatus::Rejected {
            let points = payout.points_debited();
            UserRepository::credit_points_tx(&mut tx, payout.user_id, points).await?;
            points
        } else {
            0
        };

        let amount = format_usd(payout.amount_cents);
        let (title, message) = match new_status {
            PayoutStatus::OnTheWay => (
                "Payout on the way",
                format!("Your payout of {amount} is on the way"),
            ),
            PayoutStatus::Completed => (
                "Payout completed",
                format!("Your payout of {amount} has been completed"),
            ),
            PayoutStatus::Rejected => (
                "Payout rejected",
                format!(
                    "Your payout of {amount} was rejected and {refunded_points} points were refunded"
                ),
            ),
            PayoutStatus::Pending => ("Payout updated", format!("Your payout of {amount} was updated")),
        };
        NotificationRepository::create_tx(
            &mut tx,
            &CreateNotification::for_member(payout.user_id, "payout_status", title, message),
        )
        .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit payout update", e)
        })?;

        info!(
            %payout_id,
            from = %payout.status,
            to = %new_status,
            refunded_points,
            "Payout processed"
        );

        self.invalidate_payout_caches(payout.user_id).await;

        let event = DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::PayoutStatusChanged {
                user_id: payout.user_id,
                payout_id,
                status: new_status.to_string(),
                refunded_points,
            },
        );
        self.dispatcher.publish_to_user(payout.user_id, &event).await;
        self.dispatcher.publish_to_admins(&event).await;

        Ok(updated)
    }

    /// List the current user's payout history. The first page is served
    /// cache-aside.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Payout>> {
        let cacheable = page.page == 1 && page.page_size == PageRequest::default().page_size;
        let key = keys::payout_history(ctx.user_id);

        if cacheable {
            if let Some(cached) = self.cache.provider().get(&key).await.ok().flatten() {
                if let Ok(page) = serde_json::from_str(&cached) {
                    return Ok(page);
                }
            }
        }

        let result = self.payouts.find_by_user(ctx.user_id, page).await?;

        if cacheable {
            if let Err(e) = self
                .cache
                .set_json(&key, &result, self.cache_ttl)
                .await
            {
                warn!(error = %e, key, "Failed to cache payout history");
            }
        }
        Ok(result)
    }

    /// List all payouts, optionally filtered by status (admin view).
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        status: Option<PayoutStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Payout>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.payouts.find_all(status, page).await
    }

    async fn invalidate_payout_caches(&self, user_id: Uuid) {
        for key in [
            keys::payout_history(user_id),
            keys::payout_stats_for_user(user_id),
            keys::payout_stats(),
            keys::user_stats(user_id),
        ] {
            if let Err(e) = self.cache.delete(&key).await {
                warn!(error = %e, key, "Failed to invalidate cache key");
            }
        }
    }
}

/// Render integer cents as a dollar string.
fn format_usd(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_as_dollars() {
        assert_eq!(format_usd(2500), "$25.00");
        assert_eq!(format_usd(101), "$1.01");
        assert_eq!(format_usd(99), "$0.99");
    }
}
