//! Axum route handlers for the Resume extraction API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::decoder::{extract_and_parse_document, DocumentExtraction};
use crate::errors::AppError;
use crate::extraction::ExtractedResumeData;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Absent or null is a caller error; an empty string is a valid document.
    #[serde(default)]
    pub raw_text: Option<String>,
}

/// POST /api/v1/resumes/extract
///
/// Runs the extraction engine over already-decoded text.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractedResumeData>, AppError> {
    let extractor = state.extractor.clone();
    let data =
        tokio::task::spawn_blocking(move || extractor.try_extract(request.raw_text.as_deref()))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(data))
}

/// POST /api/v1/resumes/upload
///
/// Accepts a multipart `file` field, decodes it, then extracts.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentExtraction>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let bytes = field.bytes().await?;
        info!(
            "Received upload '{}' ({} bytes, {})",
            file_name,
            bytes.len(),
            content_type.as_deref().unwrap_or("no content type")
        );

        let result = extract_and_parse_document(
            state.decoder.as_ref(),
            state.extractor.clone(),
            bytes,
            content_type.as_deref(),
        )
        .await?;

        return Ok(Json(result));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
