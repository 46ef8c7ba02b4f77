//! Console server assembly.
//!
//! Builds the admin console router and serves it behind the origin filter.
//! The filter layer is outermost so it runs before any handler; disabling
//! it in the policy leaves the router completely unwrapped.

use std::net::SocketAddr;

use axum::{response::IntoResponse, routing::get, Json, Router};
use gangway_filter::{OriginFilter, OriginFilterLayer};
use thiserror::Error;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ConsoleConfig;

/// The console HTTP service.
pub struct ConsoleService {
    config: ConsoleConfig,
}

impl ConsoleService {
    /// Create a console service, validating the configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self, ConsoleError> {
        config
            .validate()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    /// The assembled router, filter layer included. Exposed so tests can
    /// drive the exact router the server binds.
    pub fn router(&self) -> Router {
        build_router(&self.config)
    }

    /// Bind and serve until `shutdown` fires.
    pub async fn start(&self, shutdown: oneshot::Receiver<()>) -> Result<(), ConsoleError> {
        let router = build_router(&self.config);
        let addr = self.config.http_addr();

        info!(addr = %addr, "Starting console server");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ConsoleError::Bind(e.to_string()))?;

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            let _ = shutdown.await;
        })
        .await
        .map_err(|e| ConsoleError::Serve(e.to_string()))?;

        info!("Console server stopped");
        Ok(())
    }
}

fn build_router(config: &ConsoleConfig) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    match OriginFilter::from_policy(&config.filter) {
        Some(filter) => {
            info!(
                networks = filter.network_count(),
                "origin filtering enabled"
            );
            router.layer(OriginFilterLayer::new(filter))
        }
        None => router,
    }
}

async fn index() -> &'static str {
    "gangway device console\n"
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "console-runtime",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Console service errors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server runtime error
    #[error("server error: {0}")]
    Serve(String),
}
