//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use guild_common::{AppConfig, AppError};
use guild_core::traits::{AlertSettingsRepository, NoteRepository};
use guild_db::{
    create_pool, ensure_schema, MemoryAlertSettingsRepository, MemoryNoteRepository,
    PgAlertSettingsRepository, PgNoteRepository,
};
use guild_service::{
    AlertService, CommandNotifier, LogNotifier, Notifier, RosterMonitor, ServiceContextBuilder,
};
use guild_upstream::{UpstreamClient, UpstreamClientConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// Uses PostgreSQL when a database is configured and in-memory storage
/// otherwise. The stored alert configuration is loaded before returning.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let mut builder = ServiceContextBuilder::new().level_threshold(config.monitor.level_threshold);

    // Storage
    let note_repo: Arc<dyn NoteRepository>;
    let alert_settings_repo: Arc<dyn AlertSettingsRepository>;
    if let Some(database) = &config.database {
        info!("Connecting to PostgreSQL...");
        let pool = create_pool(&guild_db::DatabaseConfig::from(database))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        ensure_schema(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("PostgreSQL connection established");

        note_repo = Arc::new(PgNoteRepository::new(pool.clone()));
        alert_settings_repo = Arc::new(PgAlertSettingsRepository::new(pool.clone()));
        builder = builder.pool(pool);
    } else {
        warn!("DATABASE_URL not set, notes and alert settings are kept in memory");
        note_repo = Arc::new(MemoryNoteRepository::new());
        alert_settings_repo = Arc::new(MemoryAlertSettingsRepository::new());
    }

    // Upstream
    let upstream = Arc::new(
        UpstreamClient::new(UpstreamClientConfig::from(&config.upstream))
            .map_err(|e| AppError::Config(e.to_string()))?,
    );
    info!(url = %config.upstream.url, "Upstream client ready");

    // Notifier
    let notifier: Arc<dyn Notifier> = match &config.notifier.sound_command {
        Some(command) => Arc::new(
            CommandNotifier::parse(command).map_err(|e| AppError::Config(e.to_string()))?,
        ),
        None => Arc::new(LogNotifier),
    };

    let service_context = builder
        .note_repo(note_repo)
        .alert_settings_repo(alert_settings_repo)
        .roster_source(upstream.clone())
        .roster_commands(upstream)
        .notifier(notifier)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let alert_config = AlertService::new(&service_context).load().await;
    info!(enabled = alert_config.enabled, "Alert configuration loaded");

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server<F>(app: Router, address: &str, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Starts the roster monitor next to the HTTP server and stops it once
/// Ctrl-C is received.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let poll_interval = config.monitor.poll_interval();

    let state = create_app_state(config).await?;
    let monitor = RosterMonitor::spawn(state.service_context().clone(), poll_interval);

    let app = create_app(state)?;
    let result = run_server(app, &address, shutdown_signal()).await;

    monitor.shutdown().await;
    info!("Server stopped");
    result
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
