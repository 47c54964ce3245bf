use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::interactions::interactions_handler;
use crate::brawl::client::{BrawlApi, BrawlApiClient};
use crate::config::{AppConfig, ConfigError};

/// Shared per-process state: the immutable configuration and the upstream
/// client, both constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub brawl: Arc<dyn BrawlApi>,
}

impl AppState {
    pub fn new(config: AppConfig, brawl: Arc<dyn BrawlApi>) -> Self {
        Self {
            config: Arc::new(config),
            brawl,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = AppConfig::from_env()?;
        let client = BrawlApiClient::from_config(&config);
        Ok(Self::new(config, Arc::new(client)))
    }
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json() // JSON format for CloudWatch
                .with_target(false)
                .with_span_events(fmt::format::FmtSpan::CLOSE),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower=warn")),
        )
        .init();
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Interaction callbacks from the chat platform
        .route("/interactions", post(interactions_handler))
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state)
        // Add tracing layer for observability
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    init_tracing();

    info!("Starting brawl-interactions server");

    // Set up ctrl-c handler for graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let state = AppState::from_env()?;
    let app = create_app(state);

    // Get the port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Server listening on {}", addr);

    // Run the server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
