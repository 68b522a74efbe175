use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, warn};

use super::{DecodeError, DecodedDocument};

/// Blocking. Call from `spawn_blocking`.
///
/// `pdf-extract` (and its font parsers) can panic on malformed glyph tables, so
/// the call is isolated with `catch_unwind` and surfaced as `DecodeError::Panicked`.
pub(super) fn decode_pdf(bytes: &[u8]) -> Result<DecodedDocument, DecodeError> {
    debug!("PDF input size: {} bytes", bytes.len());

    let text = match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            return Err(DecodeError::Pdf(e.to_string()));
        }
        Err(_) => {
            error!("PDF extraction panicked");
            return Err(DecodeError::Panicked);
        }
    };

    let page_count = count_pages(&text);
    debug!("PDF decoded: {} chars over {} pages", text.len(), page_count);

    Ok(DecodedDocument { text, page_count })
}

/// Pages are separated by form feeds; a document always has at least one.
fn count_pages(text: &str) -> u32 {
    let pages = text.split('\x0C').filter(|p| !p.trim().is_empty()).count();
    pages.max(1) as u32
}
