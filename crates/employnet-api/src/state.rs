//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use employnet_auth::jwt::JwtDecoder;
use employnet_auth::webhook::WebhookVerifier;
use employnet_cache::provider::CacheManager;
use employnet_core::config::AppConfig;
use employnet_database::connection::DatabasePool;

use employnet_service::activity::ActivityService;
use employnet_service::bank_account::BankAccountService;
use employnet_service::ledger::{LedgerService, PayoutService};
use employnet_service::notification::NotificationService;
use employnet_service::stats::StatsService;
use employnet_service::user::UserService;
use employnet_service::verification::VerificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signature verifier for the video integration's webhooks
    pub video_webhooks: Arc<WebhookVerifier>,
    /// Signature verifier for the survey integration's webhooks
    pub survey_webhooks: Arc<WebhookVerifier>,
    /// Signature verifier for the identity provider's webhooks
    pub identity_webhooks: Arc<WebhookVerifier>,

    // ── Services ─────────────────────────────────────────────
    /// User provisioning and administration
    pub user_service: Arc<UserService>,
    /// Activity catalog
    pub activity_service: Arc<ActivityService>,
    /// Points ledger (completion credits, reward debits)
    pub ledger_service: Arc<LedgerService>,
    /// Payout lifecycle
    pub payout_service: Arc<PayoutService>,
    /// Verification workflow
    pub verification_service: Arc<VerificationService>,
    /// Dashboard statistics
    pub stats_service: Arc<StatsService>,
    /// Bank account linking
    pub bank_account_service: Arc<BankAccountService>,
    /// Notification feeds
    pub notification_service: Arc<NotificationService>,
}
