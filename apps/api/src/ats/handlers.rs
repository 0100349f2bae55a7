use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::ats::extract::extract_text;
use crate::ats::{analyze_text, AtsError, AtsReport, UPLOAD_FIELD};
use crate::errors::AppError;
use crate::state::AppState;

/// Extra room for multipart framing on top of the file size limit.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

fn upload_error(limit: usize) -> impl Fn(MultipartError) -> AtsError {
    move |e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AtsError::TooLarge { limit }
        } else {
            AtsError::Upload(e.body_text())
        }
    }
}

fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    content_type == Some("application/pdf")
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
}

async fn read_upload(multipart: &mut Multipart, limit: usize) -> Result<Bytes, AtsError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error(limit))? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if !is_pdf_upload(field.content_type(), field.file_name()) {
            return Err(AtsError::NotPdf);
        }
        let data = field.bytes().await.map_err(upload_error(limit))?;
        if data.len() > limit {
            return Err(AtsError::TooLarge { limit });
        }
        if data.is_empty() {
            return Err(AtsError::MissingFile);
        }
        return Ok(data);
    }
    Err(AtsError::MissingFile)
}

/// POST /api/v1/ats/check
pub async fn handle_ats_check(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let data = read_upload(&mut multipart, state.config.ats_max_upload_bytes).await?;
    let bytes = data.len();
    let text = extract_text(data).await?;
    let report = analyze_text(&text);
    info!(
        bytes,
        score = report.score,
        words = report.word_count,
        "ATS check complete"
    );
    Ok(Json(report))
}
