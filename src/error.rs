//! Error types for the pdf2name library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`RenamerError`] — **Fatal**: the batch cannot proceed at all
//!   (input/output directory missing and uncreatable, unreadable directory,
//!   invalid configuration). Returned as `Err(RenamerError)` from the
//!   top-level `run_batch*` functions.
//!
//! * [`FileError`] — **Non-fatal**: a single PDF failed (unreadable document,
//!   too few text lines, name collision) but every other file is unaffected.
//!   Stored inside [`crate::output::FileRecord`] so callers can inspect
//!   partial success rather than losing the whole batch to one bad file.
//!
//! The separation lets callers decide their own tolerance: abort on the first
//! skipped file, log and continue, or collect all errors for a post-run report.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2name library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::output::FileRecord`] rather than propagated here.
#[derive(Debug, Error)]
pub enum RenamerError {
    // ── Directory errors ──────────────────────────────────────────────────
    /// The input directory could not be created or accessed.
    #[error("Cannot use input directory '{path}': {source}\nCheck the path is writable, or pass --input-dir.")]
    InputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created or accessed.
    #[error("Cannot use output directory '{path}': {source}\nCheck the path is writable, or pass --output-dir.")]
    OutputDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input directory exists but its entries could not be listed.
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single PDF file.
///
/// Stored alongside [`crate::output::FileRecord`] when a file is skipped.
/// The batch always continues with the next file; only directory access
/// failures abort a run.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum FileError {
    /// The document could not be opened or its text could not be read.
    #[error("'{file}': text extraction failed: {detail}")]
    Extraction { file: PathBuf, detail: String },

    /// The extracted text is too short to contain the identifier line.
    #[error("'{file}': no line at index {line_index} (document has {line_count} lines)")]
    MissingLine {
        file: PathBuf,
        line_index: usize,
        line_count: usize,
    },

    /// A file with the target name already exists in the output directory.
    #[error("'{file}': target '{target}' already exists, not overwriting")]
    DuplicateTarget { file: PathBuf, target: PathBuf },

    /// The filesystem move itself failed.
    #[error("'{file}': move to '{target}' failed: {detail}")]
    Move {
        file: PathBuf,
        target: PathBuf,
        detail: String,
    },
}

impl FileError {
    /// The source file this error applies to.
    pub fn file(&self) -> &PathBuf {
        match self {
            FileError::Extraction { file, .. }
            | FileError::MissingLine { file, .. }
            | FileError::DuplicateTarget { file, .. }
            | FileError::Move { file, .. } => file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_line_display() {
        let e = FileError::MissingLine {
            file: PathBuf::from("scan.pdf"),
            line_index: 13,
            line_count: 5,
        };
        let msg = e.to_string();
        assert!(msg.contains("index 13"), "got: {msg}");
        assert!(msg.contains("5 lines"), "got: {msg}");
    }

    #[test]
    fn duplicate_target_display() {
        let e = FileError::DuplicateTarget {
            file: PathBuf::from("scan.pdf"),
            target: PathBuf::from("PDF renamed/201234567.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("201234567.pdf"), "got: {msg}");
        assert!(msg.contains("not overwriting"), "got: {msg}");
    }

    #[test]
    fn extraction_display_names_the_file() {
        let e = FileError::Extraction {
            file: PathBuf::from("broken.pdf"),
            detail: "not a PDF header".into(),
        };
        assert!(e.to_string().contains("broken.pdf"));
        assert!(e.to_string().contains("not a PDF header"));
    }

    #[test]
    fn file_accessor_covers_all_variants() {
        let errs = [
            FileError::Extraction {
                file: PathBuf::from("a.pdf"),
                detail: String::new(),
            },
            FileError::MissingLine {
                file: PathBuf::from("a.pdf"),
                line_index: 0,
                line_count: 0,
            },
            FileError::DuplicateTarget {
                file: PathBuf::from("a.pdf"),
                target: PathBuf::from("b.pdf"),
            },
            FileError::Move {
                file: PathBuf::from("a.pdf"),
                target: PathBuf::from("b.pdf"),
                detail: String::new(),
            },
        ];
        for e in errs {
            assert_eq!(e.file(), &PathBuf::from("a.pdf"));
        }
    }

    #[test]
    fn invalid_config_display() {
        let e = RenamerError::InvalidConfig("input and output directories are the same".into());
        assert!(e.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn file_error_serialises() {
        let e = FileError::DuplicateTarget {
            file: PathBuf::from("scan.pdf"),
            target: PathBuf::from("out/1.pdf"),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: FileError = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, FileError::DuplicateTarget { .. }));
    }
}
