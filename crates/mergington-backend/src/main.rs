use std::sync::Arc;

use tokio::signal;

use mergington::errors::Report;
use mergington::log;

mod config;
mod handlers;
mod routes;
mod services;

use services::ActivityServiceInMemory;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Fresh state holding the seeded activity directory.
    pub fn new() -> Self {
        Self {
            activities: ActivityServiceInMemory::seeded(),
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = config::Config::from_env()?;

    let state = Arc::new(AppState::new());
    log::info!(
        "Loaded {} activities with {} participants",
        state.activities.activity_count(),
        state.activities.participant_count()
    );

    // Setup the routes
    let app = routes::setup_routes(state, &config);

    // Setup the server
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Serving static files from {}", config.static_dir.display());
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
