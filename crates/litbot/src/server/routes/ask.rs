//! Question endpoint

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{AskRequest, Exchange};

/// POST /api/ask - Ask about the novel and the uploaded review
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Exchange>> {
    let start = Instant::now();
    tracing::info!("Question: \"{}\"", request.question);

    let exchange = state.session().ask(&request.question).await?;

    tracing::info!(
        "Answered in {}ms (logged: {})",
        start.elapsed().as_millis(),
        exchange.is_logged()
    );
    Ok(Json(exchange))
}
