use bytes::Bytes;
use tracing::{debug, warn};

use crate::ats::AtsError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Pulls plain text out of a PDF. Parsing is CPU-bound and can panic on
/// malformed input, so it runs on the blocking pool.
pub async fn extract_text(data: Bytes) -> Result<String, AtsError> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(AtsError::NotPdf);
    }

    let parsed = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            warn!("PDF text extraction panicked: {e}");
            AtsError::Unreadable
        })?;

    let text = parsed.map_err(|e| {
        debug!("PDF text extraction failed: {e}");
        AtsError::Unreadable
    })?;

    if text.trim().is_empty() {
        return Err(AtsError::NoText);
    }
    Ok(text)
}
