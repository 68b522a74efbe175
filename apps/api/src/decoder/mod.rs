//! Document decoding — turns uploaded bytes into the text blob the extraction
//! engine consumes.
//!
//! `AppState` holds an `Arc<dyn DocumentDecoder>` so the PDF backend can be
//! swapped (OCR, DOCX support) without touching handlers.

mod pdf;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::extraction::{ExtractedResumeData, ResumeExtractor};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("document is empty")]
    Empty,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF extraction panicked, likely a malformed font or glyph table")]
    Panicked,

    #[error("decoder task failed: {0}")]
    Join(String),
}

/// Decoder output: one UTF-8 blob plus the page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub text: String,
    pub page_count: u32,
}

#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    async fn decode(
        &self,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<DecodedDocument, DecodeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    Text,
}

/// PDF via `pdf-extract`, plain text and markdown as UTF-8. Everything else is rejected.
pub struct DefaultDecoder;

#[async_trait]
impl DocumentDecoder for DefaultDecoder {
    async fn decode(
        &self,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> Result<DecodedDocument, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let kind = detect_kind(&bytes, content_type)?;
        info!("Decoding {} byte document as {:?}", bytes.len(), kind);

        match kind {
            DocumentKind::Pdf => tokio::task::spawn_blocking(move || pdf::decode_pdf(&bytes))
                .await
                .map_err(|e| DecodeError::Join(e.to_string()))?,
            DocumentKind::Text => Ok(DecodedDocument {
                text: String::from_utf8_lossy(&bytes).into_owned(),
                page_count: 1,
            }),
        }
    }
}

fn detect_kind(bytes: &[u8], content_type: Option<&str>) -> Result<DocumentKind, DecodeError> {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());

    match mime.as_deref() {
        Some("application/pdf") => Ok(DocumentKind::Pdf),
        Some("text/plain") | Some("text/markdown") => Ok(DocumentKind::Text),
        None | Some("") | Some("application/octet-stream") => {
            if bytes.starts_with(PDF_MAGIC) {
                Ok(DocumentKind::Pdf)
            } else if std::str::from_utf8(bytes).is_ok() {
                Ok(DocumentKind::Text)
            } else {
                Err(DecodeError::UnsupportedContentType(
                    "application/octet-stream".to_string(),
                ))
            }
        }
        Some(other) => Err(DecodeError::UnsupportedContentType(other.to_string())),
    }
}

/// Decoding step plus extraction, as returned to upload callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentExtraction {
    pub page_count: u32,
    pub word_count: usize,
    pub data: ExtractedResumeData,
}

/// Byte-level variant of the engine entry point: decode first, then extract.
pub async fn extract_and_parse_document(
    decoder: &dyn DocumentDecoder,
    extractor: Arc<ResumeExtractor>,
    bytes: Bytes,
    content_type: Option<&str>,
) -> Result<DocumentExtraction, DecodeError> {
    let decoded = decoder.decode(bytes, content_type).await?;
    let page_count = decoded.page_count;

    let data = tokio::task::spawn_blocking(move || extractor.extract(&decoded.text))
        .await
        .map_err(|e| DecodeError::Join(e.to_string()))?;

    Ok(DocumentExtraction {
        page_count,
        word_count: data.word_count(),
        data,
    })
}
