use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::info;

use crate::errors::AppError;
use crate::export::{export_filename, inject_watermark, ExportOptions, WATERMARK_TEXT};
use crate::render::handlers::TemplateQuery;
use crate::render::render_html;
use crate::state::AppState;

/// `attachment` header with an ASCII fallback name and an RFC 5987 UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    let encoded: String = filename
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_') {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

/// POST /api/v1/resume/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Render under the read lock, convert after releasing it.
    let (html, filename) = {
        let store = state.store.read().await;
        let resume = store.state();
        (
            render_html(resume, params.template),
            export_filename(&resume.document.personal_info.full_name),
        )
    };

    let html = if state.config.export_premium {
        html
    } else {
        inject_watermark(&html, WATERMARK_TEXT)
    };

    let pdf = state
        .exporter
        .export(&html, &ExportOptions::default())
        .await?;
    info!(%filename, bytes = pdf.len(), "Exported resume");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        pdf,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii() {
        assert_eq!(
            content_disposition("Ada_Lovelace_Resume.pdf"),
            "attachment; filename=\"Ada_Lovelace_Resume.pdf\"; \
             filename*=UTF-8''Ada_Lovelace_Resume.pdf"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let value = content_disposition("José_Resume.pdf");
        assert!(value.contains("filename=\"Jos__Resume.pdf\""));
        assert!(value.ends_with("filename*=UTF-8''Jos%C3%A9_Resume.pdf"));
        assert!(value.is_ascii());
    }
}
