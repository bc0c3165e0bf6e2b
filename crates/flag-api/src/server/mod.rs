//! Server setup and initialization
//!
//! Provides the application builder, the store wiring, and the server runner.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use flag_common::{AppConfig, AppError, StoreBackend};
use flag_core::{SubmissionLogRepository, TermIdGenerator, TermRepository};
use flag_db::{
    bootstrap_schema, create_pool, InMemorySubmissionLog, InMemoryTermRepository,
    PgSubmissionLogRepository, PgTermRepository,
};
use flag_service::{ServiceContextBuilder, SubmissionPolicy, SubmissionRateLimiter};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    // Health routes are not throttled
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, config);

    router.with_state(state)
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let (term_repo, submission_log): (Arc<dyn TermRepository>, Arc<dyn SubmissionLogRepository>) =
        match config.store.backend {
            StoreBackend::Postgres => {
                let db = config.database.as_ref().ok_or_else(|| {
                    AppError::Config("DATABASE_URL is required for the postgres store".to_string())
                })?;

                info!("Connecting to PostgreSQL...");
                let pool = create_pool(&flag_db::DatabaseConfig::from(db))
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                bootstrap_schema(&pool)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("PostgreSQL connection established");

                (
                    Arc::new(PgTermRepository::new(pool.clone())),
                    Arc::new(PgSubmissionLogRepository::new(pool)),
                )
            }
            StoreBackend::Memory => {
                warn!("Using the in-memory store; data is lost on restart");
                (
                    Arc::new(InMemoryTermRepository::new()),
                    Arc::new(InMemorySubmissionLog::new()),
                )
            }
        };

    let service_context = ServiceContextBuilder::new()
        .term_repo(term_repo)
        .submission_log(submission_log)
        .id_generator(Arc::new(TermIdGenerator::new(config.id_generator.worker_id)))
        .submission_policy(SubmissionPolicy::from(&config.submission))
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Periodically drop submission log entries that fell out of the window
pub fn spawn_prune_task(state: AppState, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Err(e) = SubmissionRateLimiter::new(state.service_context())
                .prune_expired()
                .await
            {
                warn!(error = %e, "Submission log prune failed");
            }
        }
    })
}

/// Serve the application on a bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let prune_interval = config.submission.prune_interval();

    let state = create_app_state(config).await?;
    let prune_task = spawn_prune_task(state.clone(), prune_interval);
    let app = create_app(state);

    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{}", addr);

    let result = serve(listener, app, shutdown_signal()).await;
    prune_task.abort();
    result
}
