//! # Navalha REST API Server
//!
//! Binary entry point for the booking API service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navalha_persistence::{Cache, PgEmployeeRepository, connect_pool};
use navalha_rest_api::{AppState, Config, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load and validate configuration; refuse to start on a bad environment.
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!(
        version = navalha_rest_api::VERSION,
        environment = config.environment.as_str(),
        "Starting Navalha Booking API"
    );

    // Initialize PostgreSQL pool
    tracing::info!(
        max_connections = config.database_max_connections,
        "Connecting to PostgreSQL"
    );
    let pool = connect_pool(&config.pg_config()).await?;
    tracing::info!("PostgreSQL connected");

    // Stand up the cache backend picked for this environment
    let cache = Cache::connect(config.cache_settings()).await?;
    tracing::info!(backend = cache.backend(), "Cache ready");

    // Build application state
    let state = AppState {
        employees: Arc::new(PgEmployeeRepository::new(pool)),
        cache,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_addr;
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
