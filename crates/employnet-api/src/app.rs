//! Application builder — wires repositories, services, worker, and
//! router into a running Axum server.

use std::sync::Arc;

use axum::Router;
use tokio::sync::watch;

use employnet_auth::identity::{HttpIdentityProvider, IdentityProvider};
use employnet_auth::jwt::JwtDecoder;
use employnet_auth::webhook::WebhookVerifier;
use employnet_cache::provider::CacheManager;
use employnet_core::config::AppConfig;
use employnet_core::error::AppError;
use employnet_database::connection::DatabasePool;

use employnet_database::repositories::activity::ActivityRepository;
use employnet_database::repositories::activity_log::ActivityLogRepository;
use employnet_database::repositories::bank_account::BankAccountRepository;
use employnet_database::repositories::notification::NotificationRepository;
use employnet_database::repositories::payout::PayoutRepository;
use employnet_database::repositories::reward::RewardRepository;
use employnet_database::repositories::user::UserRepository;
use employnet_database::repositories::verification::VerificationRepository;

use employnet_service::activity::ActivityService;
use employnet_service::bank_account::BankAccountService;
use employnet_service::ledger::{LedgerService, PayoutService};
use employnet_service::notification::{NotificationDispatcher, NotificationService};
use employnet_service::stats::StatsService;
use employnet_service::user::UserService;
use employnet_service::verification::VerificationService;

use employnet_worker::CronScheduler;
use employnet_worker::jobs::{LedgerReconcileJob, NotificationCleanupJob};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from a constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Employ-Net server with the given configuration and
/// database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting Employ-Net server...");

    let pool = db.pool().clone();

    // ── Infrastructure ───────────────────────────────────────────
    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    let publisher = employnet_realtime::build_publisher(&config.realtime).await?;
    let email = employnet_service::email::build_sender(&config.email)?;

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(pool.clone()));
    let activity_log_repo = Arc::new(ActivityLogRepository::new(pool.clone()));
    let payout_repo = Arc::new(PayoutRepository::new(pool.clone()));
    let reward_repo = Arc::new(RewardRepository::new(pool.clone()));
    let verification_repo = Arc::new(VerificationRepository::new(pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));
    let bank_account_repo = Arc::new(BankAccountRepository::new(pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let identity: Arc<dyn IdentityProvider> =
        Arc::new(HttpIdentityProvider::new(&config.auth)?);
    let tolerance = config.webhook.timestamp_tolerance_seconds;
    let video_webhooks = Arc::new(WebhookVerifier::new(&config.webhook.video_secret, tolerance));
    let survey_webhooks = Arc::new(WebhookVerifier::new(
        &config.webhook.survey_secret,
        tolerance,
    ));
    let identity_webhooks = Arc::new(WebhookVerifier::new(
        &config.webhook.identity_secret,
        tolerance,
    ));

    // ── Services ─────────────────────────────────────────────────
    let dispatcher = Arc::new(NotificationDispatcher::new(
        Arc::clone(&notification_repo),
        email,
        publisher,
        config.realtime.channel_prefix.clone(),
        config.email.admin_inbox.clone(),
    ));

    let ledger_service = Arc::new(LedgerService::new(
        pool.clone(),
        Arc::clone(&user_repo),
        Arc::clone(&cache),
        Arc::clone(&dispatcher),
    ));
    let payout_service = Arc::new(PayoutService::new(
        pool.clone(),
        Arc::clone(&payout_repo),
        Arc::clone(&bank_account_repo),
        Arc::clone(&identity),
        Arc::clone(&cache),
        config.cache.payout_ttl_seconds,
        Arc::clone(&dispatcher),
    ));
    let activity_service = Arc::new(ActivityService::new(
        Arc::clone(&activity_repo),
        Arc::clone(&activity_log_repo),
        Arc::clone(&cache),
        config.cache.activity_ttl_seconds,
    ));
    let verification_service = Arc::new(VerificationService::new(
        Arc::clone(&verification_repo),
        Arc::clone(&activity_repo),
        Arc::clone(&user_repo),
        Arc::clone(&ledger_service),
        Arc::clone(&dispatcher),
    ));
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&user_repo),
        Arc::clone(&activity_log_repo),
        Arc::clone(&reward_repo),
        Arc::clone(&payout_repo),
        Arc::clone(&cache),
        config.cache.stats_ttl_seconds,
        config.cache.payout_ttl_seconds,
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&identity),
    ));
    let bank_account_service = Arc::new(BankAccountService::new(Arc::clone(&bank_account_repo)));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));

    // ── Background worker ────────────────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let cleanup = Arc::new(NotificationCleanupJob::new(
            Arc::clone(&notification_repo),
            config.worker.notification_retention_days,
        ));
        let reconcile = Arc::new(LedgerReconcileJob::new(
            Arc::clone(&user_repo),
            Arc::clone(&activity_log_repo),
            Arc::clone(&reward_repo),
            Arc::clone(&payout_repo),
        ));

        let scheduler = CronScheduler::new().await?;
        scheduler
            .register_tasks(&config.worker, cleanup, reconcile)
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── HTTP server ──────────────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        db,
        cache,
        jwt_decoder,
        video_webhooks,
        survey_webhooks,
        identity_webhooks,
        user_service,
        activity_service,
        ledger_service,
        payout_service,
        verification_service,
        stats_service,
        bank_account_service,
        notification_service,
    };

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Employ-Net server listening on {addr}");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // The watch sender fired before serve returned; the receiver keeps
    // the channel alive until the scheduler is drained.
    let _ = shutdown_rx.changed().await;
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Employ-Net server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
