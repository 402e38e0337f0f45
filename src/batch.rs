//! Batch entry points: discover, then rename, one file at a time.
//!
//! ## Why strictly sequential?
//!
//! Collision handling defines "first" by processing order: when two
//! documents carry the same identifier, the earlier one keeps the name and
//! the later one is skipped. Processing files concurrently would make that
//! winner arbitrary. The work is local disk I/O on the operator's machine,
//! so sequential processing costs little and keeps every run reproducible.

use crate::config::RenameConfig;
use crate::error::{FileError, RenamerError};
use crate::output::{BatchOutput, BatchStats, FileRecord};
use crate::pipeline::extract::{PdfiumExtractor, TextExtractor};
use crate::pipeline::{discover, extract, locate, relocate};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rename every PDF in the input directory after its identifier line.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `config` — Batch configuration (directories, line index, extractor)
///
/// # Returns
/// `Ok(BatchOutput)` on success, even if some — or all — files were skipped
/// (check `output.stats.skipped` and the per-file records).
///
/// # Errors
/// Returns `Err(RenamerError)` only for fatal errors:
/// - Input or output directory cannot be created or accessed
/// - Input directory cannot be listed
pub async fn run_batch(config: &RenameConfig) -> Result<BatchOutput, RenamerError> {
    let total_start = Instant::now();
    info!(
        "Starting batch: {} -> {}",
        config.input_dir.display(),
        config.output_dir.display()
    );

    // ── Step 1: Ensure both directories exist ────────────────────────────
    discover::ensure_dir(&config.input_dir)
        .await
        .map_err(|e| RenamerError::InputDirUnavailable {
            path: config.input_dir.clone(),
            source: e,
        })?;
    discover::ensure_dir(&config.output_dir)
        .await
        .map_err(|e| RenamerError::OutputDirUnavailable {
            path: config.output_dir.clone(),
            source: e,
        })?;

    // ── Step 2: Resolve the extractor ────────────────────────────────────
    let extractor = resolve_extractor(config);

    // ── Step 3: Discover PDFs ────────────────────────────────────────────
    let files = discover::discover_pdfs(&config.input_dir).await?;
    let total_files = files.len();
    info!(
        "Found {} PDF file(s) in {}",
        total_files,
        config.input_dir.display()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(total_files);
    }

    // ── Step 4: Process files one at a time ──────────────────────────────
    let mut records = Vec::with_capacity(total_files);
    for (position, path) in files.iter().enumerate() {
        let index = position + 1;
        let file_name = display_name(path);

        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(index, total_files, &file_name);
        }

        let file_start = Instant::now();
        let outcome = process_file(path, &extractor, config).await;
        let duration_ms = file_start.elapsed().as_millis() as u64;

        let record = match outcome {
            Ok(destination) => {
                let new_name = display_name(&destination);
                debug!("Renamed {} -> {}", file_name, new_name);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_renamed(index, total_files, &file_name, &new_name);
                }
                FileRecord {
                    file: path.clone(),
                    destination: Some(destination),
                    duration_ms,
                    error: None,
                }
            }
            Err(error) => {
                warn!("Skipping {}: {}", file_name, error);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_skipped(index, total_files, &file_name, &error.to_string());
                }
                FileRecord {
                    file: path.clone(),
                    destination: None,
                    duration_ms,
                    error: Some(error),
                }
            }
        };
        records.push(record);
    }

    // ── Step 5: Compute stats ────────────────────────────────────────────
    let renamed = records.iter().filter(|r| r.renamed()).count();
    let skipped = records.len() - renamed;
    let stats = BatchStats {
        discovered: total_files,
        renamed,
        skipped,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Batch complete: {}/{} file(s) renamed, {} skipped, {}ms total",
        renamed, total_files, skipped, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(total_files, renamed);
    }

    Ok(BatchOutput { records, stats })
}

/// Synchronous wrapper around [`run_batch`].
///
/// Creates a temporary tokio runtime internally.
pub fn run_batch_sync(config: &RenameConfig) -> Result<BatchOutput, RenamerError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| RenamerError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(run_batch(config))
}

/// One file through the whole pipeline: extract, locate, move.
///
/// Every failure is an [`FileError`]; the caller records it and continues.
async fn process_file(
    path: &Path,
    extractor: &Arc<dyn TextExtractor>,
    config: &RenameConfig,
) -> Result<PathBuf, FileError> {
    let text = extract::extract_text(extractor, path).await?;
    let identifier = locate::locate_identifier(&text, config.identifier_line_index, path)?;
    let destination = relocate::destination_path(&config.output_dir, &identifier);
    relocate::safe_move(path, &destination).await?;
    Ok(destination)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Resolve the text extractor, from most-specific to least-specific.
///
/// 1. **Pre-built extractor** (`config.extractor`) — the caller constructed
///    it; we use it as-is. This is how tests drive the batch without a
///    pdfium library or real PDF fixtures.
///
/// 2. **Built-in pdfium extractor** — binds to the pdfium library lazily on
///    first use, so a missing library surfaces as per-file extraction
///    errors (every file stays where it is) rather than aborting the run.
fn resolve_extractor(config: &RenameConfig) -> Arc<dyn TextExtractor> {
    if let Some(ref extractor) = config.extractor {
        return Arc::clone(extractor);
    }
    Arc::new(PdfiumExtractor)
}

/// File name for logs and callbacks; falls back to the full path when the
/// path somehow has no final component.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
