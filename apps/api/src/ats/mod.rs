// ATS check: text extraction from an uploaded PDF plus a readability report.

pub mod analysis;
pub mod extract;
pub mod handlers;

use thiserror::Error;

pub use analysis::{analyze_text, AtsReport};

/// Multipart field carrying the uploaded resume.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Error)]
pub enum AtsError {
    #[error("No 'resume' file was uploaded")]
    MissingFile,

    #[error("Only PDF files are supported")]
    NotPdf,

    #[error("The uploaded file exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("The PDF could not be read")]
    Unreadable,

    #[error("The PDF contains no extractable text (is it a scanned image?)")]
    NoText,

    #[error("Malformed upload: {0}")]
    Upload(String),
}
