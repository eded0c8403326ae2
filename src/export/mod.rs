//! # Export Adapter
//!
//! Serializes the rendered 2D preview into a PDF file.
//!
//! The adapter takes the document the preview pane is currently showing.
//! When the decorative perspective view is active there is no 2D document
//! to capture, and the export fails with [`ExportError::PreviewUnavailable`]
//! without attempting anything; the UI surfaces that as a blocking message
//! telling the user to switch back. Any other failure surfaces as a generic
//! retry-manually message. There is no automatic retry and no guard against
//! re-triggering while a write is still in flight.

mod pdf;

pub use pdf::render_pdf;

use crate::catalog::{BackgroundOption, Theme};
use crate::preview::Document;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exports always use this filename unless the caller overrides it.
pub const DEFAULT_EXPORT_FILENAME: &str = "my-resume.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    /// The 2D preview is not mounted (perspective view active).
    #[error("Please switch to the 2D preview to export a PDF")]
    PreviewUnavailable,
    #[error("Failed to write PDF file: {0}")]
    Io(#[from] std::io::Error),
}

/// Capture the mounted 2D preview document into a PDF at `path`.
///
/// `mounted` is `None` when the perspective view is active; the operation
/// fails before any rendering happens.
pub fn export_to_pdf(
    mounted: Option<&Document>,
    theme: &Theme,
    background: &BackgroundOption,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let doc = mounted.ok_or(ExportError::PreviewUnavailable)?;
    let bytes = render_pdf(doc, theme, background);
    std::fs::write(path, bytes)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_background, theme_by_id};
    use crate::preview::{Block, Line, Role};
    use tempfile::TempDir;

    fn sample_doc() -> Document {
        Document {
            blocks: vec![Block::Text(Line::from_span("Ada", Role::Body))],
        }
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join(DEFAULT_EXPORT_FILENAME);
        let theme = theme_by_id("classic-blue").expect("theme exists");

        let written = export_to_pdf(Some(&sample_doc()), &theme, &default_background(), &path)
            .expect("export succeeds");
        assert_eq!(written, path);

        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_export_without_mounted_preview_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join(DEFAULT_EXPORT_FILENAME);
        let theme = theme_by_id("classic-blue").expect("theme exists");

        let err = export_to_pdf(None, &theme, &default_background(), &path)
            .expect_err("precondition fails");
        assert!(matches!(err, ExportError::PreviewUnavailable));
        assert!(err.to_string().contains("2D preview"));
        // No capture was attempted.
        assert!(!path.exists());
    }
}
