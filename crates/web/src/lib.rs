//! Roster web application
//!
//! Server-rendered forms for registering users and browsing them page by
//! page, backed by SQLite. Flash notices and CSRF tokens travel in signed
//! cookies.

pub mod config;
pub mod cookies;
pub mod csrf;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

use std::net::SocketAddr;

use tracing::info;

use user_service_lib::infra::Database;

use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

pub use user_service_lib::{run_migrations, MigrateAction};

/// Run the HTTP server until Ctrl-C or SIGTERM.
pub async fn run_server(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::connect(&config.database).await?;
    info!("Database connected: {}", config.database.url);

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(database, config)?;
    let database = Database::clone(&state.database);

    let app = create_router(state);

    info!("Roster listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, closing database");
    database.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
