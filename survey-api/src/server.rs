//! HTTP server setup and lifecycle

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use survey_db::{SurveyDatastore, SurveyDbError};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server router and bind address
pub async fn create_server(
    config: ApiConfig,
    datastore: Arc<SurveyDatastore>,
) -> Result<(Router, SocketAddr), SurveyDbError> {
    let state = AppState::new(datastore).await?;

    let mut router = create_router(state).layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| SurveyDbError::Config(format!("Invalid bind address: {}", e)))?;

    Ok((router, addr))
}

/// Run the API server until shutdown is requested
pub async fn run_server(
    config: ApiConfig,
    datastore: Arc<SurveyDatastore>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, datastore).await?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Survey API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Survey API stopped");
    Ok(())
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|e| tracing::error!(error = %e, "Failed to install Ctrl+C handler"));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
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
