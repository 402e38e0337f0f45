//! Directory discovery: ensure the working directories exist and list the
//! PDFs to process.
//!
//! ## Why sort the listing?
//!
//! Directory iteration order is platform-arbitrary. When two documents carry
//! the same identifier, "which one wins the name and which one is skipped"
//! must not depend on filesystem internals, so the listing is sorted by path
//! before the batch runs. Re-runs then behave identically.

use crate::error::RenamerError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create `dir` (and any missing parents) if it does not exist.
///
/// Errors bubble up as plain `io::Error`; the caller attaches the
/// input-vs-output context.
pub async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await
}

/// True if `path` has a `.pdf` extension, compared ASCII case-insensitively.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(OsStr::new("pdf")))
        .unwrap_or(false)
}

/// List the regular `.pdf` files directly inside `dir`, sorted by path.
///
/// Subdirectories and non-PDF files are ignored. An empty directory yields
/// an empty list, which is a perfectly fine batch of zero files.
pub async fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>, RenamerError> {
    let mut entries =
        tokio::fs::read_dir(dir)
            .await
            .map_err(|e| RenamerError::DirectoryReadFailed {
                path: dir.to_path_buf(),
                source: e,
            })?;

    let mut pdfs = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| RenamerError::DirectoryReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?
    {
        let path = entry.path();
        if !has_pdf_extension(&path) {
            continue;
        }
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file {
            pdfs.push(path);
        }
    }

    pdfs.sort();
    debug!("Discovered {} PDF file(s) in {}", pdfs.len(), dir.display());
    Ok(pdfs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_pdf_extension(Path::new("a.pdf")));
        assert!(has_pdf_extension(Path::new("a.PDF")));
        assert!(has_pdf_extension(Path::new("a.Pdf")));
        assert!(!has_pdf_extension(Path::new("a.pdfx")));
        assert!(!has_pdf_extension(Path::new("a.txt")));
        assert!(!has_pdf_extension(Path::new("pdf")));
        assert!(!has_pdf_extension(Path::new("a")));
    }

    #[tokio::test]
    async fn discovery_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        std::fs::write(dir.path().join("a.pdf"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let found = discover_pdfs(dir.path()).await.unwrap();
        let names: Vec<_> = found
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[tokio::test]
    async fn discovery_accepts_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("SCAN.PDF"), b"x").unwrap();

        let found = discover_pdfs(dir.path()).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn empty_directory_is_an_empty_batch() {
        let dir = TempDir::new().unwrap();
        let found = discover_pdfs(dir.path()).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn missing_directory_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let err = discover_pdfs(&gone).await.unwrap_err();
        assert!(matches!(err, RenamerError::DirectoryReadFailed { .. }));
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_paths() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        // Second call on an existing directory is a no-op.
        ensure_dir(&nested).await.unwrap();
    }
}
