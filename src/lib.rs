//! # pdf2name
//!
//! Rename batches of PDF files after an identifier read from their text.
//!
//! ## Why this crate?
//!
//! Scanners and download portals hand you folders full of
//! `scan_2024_08_001.pdf`. The document's real identity is printed inside
//! it — on a known line of the extracted text. This crate reads that line
//! from every PDF in a directory, strips the human-friendly separators,
//! and moves each file to `<identifier>.pdf` in an output directory. It
//! never overwrites: a second document claiming the same identifier stays
//! put and is reported, because a name collision usually means a duplicate
//! scan someone should look at.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input directory
//!  │
//!  ├─ 1. Discover  list *.pdf files in stable (sorted) order
//!  ├─ 2. Extract   full document text via pdfium (spawn_blocking)
//!  ├─ 3. Locate    take line 13 (configurable), trim, drop '-' separators
//!  ├─ 4. Relocate  move to <output>/<identifier>.pdf, skip on collision
//!  └─ 5. Output    per-file records + batch stats
//! ```
//!
//! A file that fails any stage is skipped — left untouched in the input
//! directory with the reason recorded — and the batch moves on. Re-running
//! the same batch is safe: already-moved files are gone from the input
//! directory, everything else is attempted again.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2name::{run_batch, RenameConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Scans "PDF files/", moves into "PDF renamed/", identifier on line 13
//!     let config = RenameConfig::default();
//!     let output = run_batch(&config).await?;
//!     println!(
//!         "{} renamed, {} skipped",
//!         output.stats.renamed, output.stats.skipped
//!     );
//!     for record in output.skipped() {
//!         if let Some(err) = &record.error {
//!             eprintln!("skipped: {}", err);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2name` binary (clap + indicatif + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2name = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{run_batch, run_batch_sync};
pub use config::{
    RenameConfig, RenameConfigBuilder, DEFAULT_IDENTIFIER_LINE_INDEX, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_DIR,
};
pub use error::{FileError, RenamerError};
pub use output::{BatchOutput, BatchStats, FileRecord};
pub use pipeline::extract::{PdfiumExtractor, TextExtractor};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
