//! Reference corpus excerpt endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::server::state::AppState;
use crate::types::{CorpusExcerpt, ExcerptQuery};

/// GET /api/corpus?offset=&limit= - Read a window of the reference text
pub async fn excerpt(
    State(state): State<AppState>,
    Query(query): Query<ExcerptQuery>,
) -> Json<CorpusExcerpt> {
    let limit = query.limit.unwrap_or(state.config().ui.excerpt_chars);
    Json(state.session().excerpt(query.offset, limit))
}
