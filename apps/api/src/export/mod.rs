//! PDF export: filename, watermark, and the converter seam.

pub mod converter;
pub mod handlers;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use converter::CommandPdfExporter;

pub const WATERMARK_TEXT: &str = "Created with Resume Builder";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to start PDF converter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF converter exited with {status}: {stderr}")]
    ConverterFailed { status: String, stderr: String },

    #[error("PDF converter produced no output")]
    EmptyOutput,

    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    A4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
}

/// Fixed export settings: A4, portrait, rendered at 2x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            scale: 2,
        }
    }
}

/// Turns a standalone HTML document into PDF bytes.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, html: &str, options: &ExportOptions) -> Result<Vec<u8>, ExportError>;
}

/// `"Jane Q Doe"` → `"Jane_Q_Doe_Resume.pdf"`; blank names give `"Resume.pdf"`.
pub fn export_filename(full_name: &str) -> String {
    let parts: Vec<String> = full_name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '.'))
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{}_Resume.pdf", parts.join("_"))
    }
}

/// Inserts a fixed-position watermark just before `</body>`, or appends it
/// when the document has no body close tag.
pub fn inject_watermark(html: &str, text: &str) -> String {
    let mark = format!(
        "<div class=\"export-watermark\" style=\"position: fixed; bottom: 8mm; right: 10mm; \
         font-size: 9pt; color: rgba(0, 0, 0, 0.35);\">{}</div>",
        crate::render::html::escape(text)
    );
    match html.rfind("</body>") {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + mark.len());
            out.push_str(&html[..at]);
            out.push_str(&mark);
            out.push_str(&html[at..]);
            out
        }
        None => format!("{html}{mark}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_name() {
        assert_eq!(export_filename("Jane Q Doe"), "Jane_Q_Doe_Resume.pdf");
        assert_eq!(export_filename("  Ada   Lovelace "), "Ada_Lovelace_Resume.pdf");
        assert_eq!(export_filename("José García"), "José_García_Resume.pdf");
    }

    #[test]
    fn test_filename_blank_or_unsafe_name() {
        assert_eq!(export_filename(""), "Resume.pdf");
        assert_eq!(export_filename("   "), "Resume.pdf");
        assert_eq!(export_filename("\"/\\"), "Resume.pdf");
        assert_eq!(export_filename("a/../b"), "a..b_Resume.pdf");
    }

    #[test]
    fn test_watermark_goes_before_body_close() {
        let html = "<html><body><main></main></body></html>";
        let out = inject_watermark(html, "Made <here>");
        let mark = out.find("export-watermark").unwrap();
        assert!(mark > out.find("</main>").unwrap());
        assert!(mark < out.find("</body>").unwrap());
        assert!(out.contains("Made &lt;here&gt;"));
        assert!(out.ends_with("</body></html>"));
    }

    #[test]
    fn test_watermark_appended_without_body() {
        let out = inject_watermark("<p>x</p>", WATERMARK_TEXT);
        assert!(out.starts_with("<p>x</p><div class=\"export-watermark\""));
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert_eq!(options.scale, 2);
    }
}
