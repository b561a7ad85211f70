//! HTTP server initialization and runtime setup.
//!
//! Builds the store client, wires the service, and runs the Axum server until
//! a shutdown signal arrives.

use crate::application::services::RoomService;
use crate::config::{Config, StoreConfig};
use crate::domain::repositories::RoomRepository;
use crate::infrastructure::persistence::PgRoomRepository;
use crate::infrastructure::postgrest::{PostgrestClient, PostgrestRoomRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the repository for the configured store.
///
/// For Postgres this opens the pool and applies the bootstrap migration.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the database connection
/// fails, or the migration fails.
pub async fn connect_store(store: &StoreConfig) -> Result<Arc<dyn RoomRepository>> {
    match store {
        StoreConfig::Postgrest { url, api_key } => {
            let client = PostgrestClient::new(url, api_key)
                .context("Failed to build the store HTTP client")?;
            tracing::info!("Using hosted store at {url}");
            Ok(Arc::new(PostgrestRoomRepository::new(client)))
        }
        StoreConfig::Postgres {
            database_url,
            max_connections,
            connect_timeout,
        } => {
            let pool = PgPoolOptions::new()
                .max_connections(*max_connections)
                .acquire_timeout(Duration::from_secs(*connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgRoomRepository::new(Arc::new(pool))))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store client cannot be set up
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config.store).await?;

    let room_service = RoomService::new(repository)
        .with_empty_list_not_found(config.list_empty_as_not_found);
    let state = AppState::new(Arc::new(room_service));

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Servidor corriendo en http://{addr}");
    tracing::info!("Documentación disponible en http://{addr}/api-docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
