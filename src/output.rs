//! Output types returned by a batch run.
//!
//! [`run_batch`](crate::run_batch) returns a [`BatchOutput`]: one
//! [`FileRecord`] per discovered PDF plus aggregate [`BatchStats`]. All three
//! types serialise with serde so the CLI's `--json` mode and any caller-side
//! reporting get the full picture, including per-file errors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::FileError;

/// The outcome for a single discovered PDF.
///
/// Exactly one of `destination` and `error` is `Some`: a renamed file has a
/// destination and no error, a skipped file has an error and no destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path of the source file inside the input directory.
    pub file: PathBuf,
    /// Where the file was moved to, if it was renamed.
    pub destination: Option<PathBuf>,
    /// Wall-clock time spent on this file (extraction through move).
    pub duration_ms: u64,
    /// Why the file was skipped, if it was.
    pub error: Option<FileError>,
}

impl FileRecord {
    /// True if the file was moved to its destination.
    pub fn renamed(&self) -> bool {
        self.error.is_none() && self.destination.is_some()
    }
}

/// Aggregate statistics for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    /// Number of PDF files found in the input directory.
    pub discovered: usize,
    /// Files successfully moved to the output directory.
    pub renamed: usize,
    /// Files left in place because of a per-file error.
    pub skipped: usize,
    /// Wall-clock duration of the whole run.
    pub total_duration_ms: u64,
}

/// Everything produced by one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// One record per discovered file, in processing order.
    pub records: Vec<FileRecord>,
    /// Aggregate counts and timing.
    pub stats: BatchStats,
}

impl BatchOutput {
    /// Records for files that were skipped, in processing order.
    pub fn skipped(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| !r.renamed())
    }

    /// Records for files that were renamed, in processing order.
    pub fn renamed(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.renamed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, dest: Option<&str>, error: Option<FileError>) -> FileRecord {
        FileRecord {
            file: PathBuf::from(name),
            destination: dest.map(PathBuf::from),
            duration_ms: 1,
            error,
        }
    }

    #[test]
    fn renamed_requires_destination_and_no_error() {
        assert!(record("a.pdf", Some("out/1.pdf"), None).renamed());
        assert!(!record("a.pdf", None, None).renamed());
        assert!(!record(
            "a.pdf",
            None,
            Some(FileError::Extraction {
                file: PathBuf::from("a.pdf"),
                detail: "boom".into(),
            })
        )
        .renamed());
    }

    #[test]
    fn skipped_and_renamed_partition_records() {
        let out = BatchOutput {
            records: vec![
                record("a.pdf", Some("out/1.pdf"), None),
                record(
                    "b.pdf",
                    None,
                    Some(FileError::MissingLine {
                        file: PathBuf::from("b.pdf"),
                        line_index: 13,
                        line_count: 2,
                    }),
                ),
            ],
            stats: BatchStats {
                discovered: 2,
                renamed: 1,
                skipped: 1,
                total_duration_ms: 2,
            },
        };
        assert_eq!(out.renamed().count(), 1);
        assert_eq!(out.skipped().count(), 1);
        assert_eq!(out.skipped().next().map(|r| r.file.clone()), Some(PathBuf::from("b.pdf")));
    }
}
