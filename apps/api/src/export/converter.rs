use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::export::{ExportError, ExportOptions, Orientation, PageSize, PdfExporter};

/// CSS pixels per inch; the converter's scale is expressed as DPI.
const BASE_DPI: u32 = 96;

/// Runs an external wkhtmltopdf-compatible converter over a temp HTML file.
#[derive(Debug, Clone)]
pub struct CommandPdfExporter {
    program: String,
}

impl CommandPdfExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

pub fn converter_args(options: &ExportOptions, input: &Path, output: &Path) -> Vec<OsString> {
    let page_size = match options.page_size {
        PageSize::A4 => "A4",
    };
    let orientation = match options.orientation {
        Orientation::Portrait => "Portrait",
    };
    vec![
        "--page-size".into(),
        page_size.into(),
        "--orientation".into(),
        orientation.into(),
        "--dpi".into(),
        (BASE_DPI * options.scale).to_string().into(),
        "--quiet".into(),
        input.as_os_str().to_owned(),
        output.as_os_str().to_owned(),
    ]
}

#[async_trait]
impl PdfExporter for CommandPdfExporter {
    async fn export(&self, html: &str, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("resume.html");
        let output = workdir.path().join("resume.pdf");
        tokio::fs::write(&input, html).await?;

        let args = converter_args(options, &input, &output);
        debug!(program = %self.program, ?args, "Running PDF converter");

        let result = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|source| ExportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ExportError::ConverterFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let pdf = match tokio::fs::read(&output).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        if pdf.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        info!(bytes = pdf.len(), "Generated PDF");
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_converter_args() {
        let args = converter_args(
            &ExportOptions::default(),
            &PathBuf::from("/tmp/in.html"),
            &PathBuf::from("/tmp/out.pdf"),
        );
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "--page-size",
                "A4",
                "--orientation",
                "Portrait",
                "--dpi",
                "192",
                "--quiet",
                "/tmp/in.html",
                "/tmp/out.pdf",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let exporter = CommandPdfExporter::new("definitely-not-a-pdf-converter-binary");
        let err = exporter
            .export("<html></html>", &ExportOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_converter_error() {
        let exporter = CommandPdfExporter::new("false");
        let err = exporter
            .export("<html></html>", &ExportOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::ConverterFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_silent_success_without_output_is_empty() {
        let exporter = CommandPdfExporter::new("true");
        let err = exporter
            .export("<html></html>", &ExportOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyOutput));
    }
}
