//! Review and reflection upload endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::session::ReviewState;
use crate::types::{UploadOutcome, UploadedDocument};

/// POST /api/review - Upload the review document
pub async fn upload_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadOutcome>> {
    let doc = read_upload(multipart).await?;
    tracing::info!("Processing review: {} ({} bytes)", doc.filename, doc.size_bytes());
    let outcome = state.session().upload_review(doc)?;
    Ok(Json(outcome))
}

/// GET /api/review - Current review preview
pub async fn current_review(State(state): State<AppState>) -> Result<Json<ReviewState>> {
    state.session().review().map(Json).ok_or(Error::ReviewMissing)
}

/// POST /api/reflection - Upload the reflection journal
pub async fn upload_reflection(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadOutcome>> {
    let doc = read_upload(multipart).await?;
    tracing::info!("Processing reflection: {} ({} bytes)", doc.filename, doc.size_bytes());
    let outcome = state.session().upload_reflection(doc)?;
    Ok(Json(outcome))
}

/// Take the first multipart field that carries a filename
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        Error::InvalidUpload(format!("Failed to read multipart field: {}", e))
    })? {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            Error::InvalidUpload(format!("Failed to read file '{}': {}", filename, e))
        })?;

        return Ok(UploadedDocument::new(filename, data.to_vec()));
    }

    Err(Error::InvalidUpload("No file in upload".to_string()))
}
