//! HTTP server for litbot

pub mod page;
pub mod routes;
pub mod state;

use axum::{extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::LitbotConfig;
use crate::error::{Error, Result};
use state::AppState;

/// litbot HTTP server
pub struct LitbotServer {
    config: LitbotConfig,
    state: AppState,
}

impl LitbotServer {
    /// Create a new server, loading the reference corpus
    pub fn new(config: LitbotConfig) -> Result<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(self.state);

        tracing::info!("Starting litbot server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Build the router with all routes
pub fn build_router(state: AppState) -> Router {
    let server_config = state.config().server.clone();

    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        // API routes with body limit for multipart uploads
        .nest("/api", routes::api_routes(server_config.max_upload_size))
        .with_state(state)
        // Middleware layers (order matters - applied bottom to top)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if server_config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

/// The single page
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.config().ui))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
