//! Text extraction: pull the full plain text out of one PDF via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, preventing the Tokio worker
//! threads from stalling while a document is parsed.
//!
//! ## Why a trait?
//!
//! [`TextExtractor`] is the one seam in the pipeline that touches a native
//! library. Batch semantics (line lookup, collision handling, idempotence)
//! are exercised in tests through a fake extractor, so they never depend on
//! a pdfium build or on real PDF fixtures.
//!
//! ## Line stability
//!
//! pdfium page text does not always end with a line break. Each non-empty
//! page's text is newline-terminated before concatenation so the last line
//! of one page and the first line of the next never fuse; empty pages
//! contribute nothing. The identifier line index stays meaningful across
//! page boundaries.

use crate::error::FileError;
use pdfium_render::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Extracts the full plain text of one document, pages concatenated in order.
///
/// Implementations must be `Send + Sync`: extraction runs on a blocking
/// worker thread. The built-in implementation is [`PdfiumExtractor`]; tests
/// and embedders can substitute their own via
/// [`crate::config::RenameConfigBuilder::extractor`].
pub trait TextExtractor: Send + Sync {
    /// Extract all text from the document at `path`.
    ///
    /// Any failure is an [`FileError::Extraction`] naming the file; the
    /// batch records it and moves on.
    fn extract_text(&self, path: &Path) -> Result<String, FileError>;
}

/// The default extractor, backed by the pdfium library.
pub struct PdfiumExtractor;

impl TextExtractor for PdfiumExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, FileError> {
        extract_text_blocking(path)
    }
}

/// Run `extractor` for `path` on the blocking thread pool.
///
/// A panic inside the extractor is converted into a per-file
/// [`FileError::Extraction`] so one hostile document cannot take down the
/// batch.
pub async fn extract_text(
    extractor: &Arc<dyn TextExtractor>,
    path: &Path,
) -> Result<String, FileError> {
    let extractor = Arc::clone(extractor);
    let owned = path.to_path_buf();
    let file = path.to_path_buf();

    let result = tokio::task::spawn_blocking(move || extractor.extract_text(&owned))
        .await
        .map_err(|e| FileError::Extraction {
            file,
            detail: format!("Extraction task panicked: {}", e),
        })?;

    result
}

/// Blocking implementation of pdfium text extraction.
fn extract_text_blocking(path: &Path) -> Result<String, FileError> {
    let pdfium = bind_pdfium().map_err(|detail| FileError::Extraction {
        file: path.to_path_buf(),
        detail,
    })?;

    let document = pdfium.load_pdf_from_file(path, None).map_err(|e| {
        let err_str = format!("{:?}", e);
        let detail = if err_str.contains("Password") || err_str.contains("password") {
            "document is password-protected".to_string()
        } else {
            err_str
        };
        FileError::Extraction {
            file: path.to_path_buf(),
            detail,
        }
    })?;

    let pages = document.pages();
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        let page_text = page.text().map_err(|e| FileError::Extraction {
            file: path.to_path_buf(),
            detail: format!("text read failed on page {}: {:?}", index + 1, e),
        })?;
        let chunk = page_text.all();
        if chunk.is_empty() {
            continue;
        }
        text.push_str(&chunk);
        if !chunk.ends_with('\n') {
            text.push('\n');
        }
    }

    debug!(
        "Extracted {} byte(s) of text from {}",
        text.len(),
        path.display()
    );
    Ok(text)
}

/// Bind to a pdfium library: current directory first, then system paths.
fn bind_pdfium() -> Result<Pdfium, String> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| {
            format!(
                "failed to load the pdfium library: {:?}\n\
                 Place libpdfium next to the executable or install it system-wide.",
                e
            )
        })?;
    Ok(Pdfium::new(bindings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FixedExtractor {
        text: String,
    }

    impl TextExtractor for FixedExtractor {
        fn extract_text(&self, _path: &Path) -> Result<String, FileError> {
            Ok(self.text.clone())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_text(&self, path: &Path) -> Result<String, FileError> {
            Err(FileError::Extraction {
                file: path.to_path_buf(),
                detail: "no such document".into(),
            })
        }
    }

    #[tokio::test]
    async fn wrapper_passes_text_through() {
        let extractor: Arc<dyn TextExtractor> = Arc::new(FixedExtractor {
            text: "line one\nline two\n".into(),
        });
        let text = extract_text(&extractor, Path::new("a.pdf")).await.unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[tokio::test]
    async fn wrapper_propagates_extraction_errors() {
        let extractor: Arc<dyn TextExtractor> = Arc::new(FailingExtractor);
        let err = extract_text(&extractor, Path::new("missing.pdf"))
            .await
            .unwrap_err();
        match err {
            FileError::Extraction { file, detail } => {
                assert_eq!(file, PathBuf::from("missing.pdf"));
                assert!(detail.contains("no such document"));
            }
            other => panic!("expected Extraction, got {:?}", other),
        }
    }
}
