//! API routes for the litbot server

pub mod ask;
pub mod corpus;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Uploads - with larger body limit for files
        .route(
            "/review",
            post(upload::upload_review).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/review", get(upload::current_review))
        .route(
            "/reflection",
            post(upload::upload_reflection).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Discussion
        .route("/ask", post(ask::ask))
        // Reference text
        .route("/corpus", get(corpus::excerpt))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "litbot",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Literature discussion with review upload and interaction log",
        "endpoints": {
            "POST /api/review": "Upload a review (.txt, .docx)",
            "GET /api/review": "Current review preview",
            "POST /api/ask": "Ask a question about the novel and the review",
            "POST /api/reflection": "Upload a reflection journal (.txt, .docx)",
            "GET /api/corpus": "Read an excerpt of the reference text"
        }
    }))
}
