//! Progress-callback trait for per-file batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::RenameConfigBuilder::progress_callback`] to receive
//! real-time events as the batch works through each PDF.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a Tokio broadcast channel, a WebSocket, a database record,
//! or a terminal progress bar — without the library knowing anything about how
//! the host application communicates. The trait is `Send + Sync` so the same
//! callback can cross the runtime's thread boundaries.
//!
//! # Example
//!
//! ```rust
//! use pdf2name::{BatchProgressCallback, RenameConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     renamed: Arc<AtomicUsize>,
//! }
//!
//! impl BatchProgressCallback for CountingCallback {
//!     fn on_file_renamed(&self, index: usize, total_files: usize, file_name: &str, new_name: &str) {
//!         self.renamed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("[{}/{}] {} -> {}", index, total_files, file_name, new_name);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback {
//!     renamed: Arc::new(AtomicUsize::new(0)),
//! });
//!
//! let config = RenameConfig::builder()
//!     .progress_callback(counter as Arc<dyn BatchProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the batch pipeline as it processes each file.
///
/// Implementations must be `Send + Sync` (the batch runs on an async runtime
/// and extraction happens on blocking worker threads). All methods have
/// default no-op implementations so callers only override what they care
/// about.
///
/// Files are processed strictly one at a time, so no two methods are ever
/// called concurrently for the same run.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once after discovery, before any file is processed.
    ///
    /// # Arguments
    /// * `total_files` — number of PDFs found in the input directory
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called just before a file's text is extracted.
    ///
    /// # Arguments
    /// * `index`       — 1-indexed position in the batch
    /// * `total_files` — total files in the batch
    /// * `file_name`   — source file name (no directory)
    fn on_file_start(&self, index: usize, total_files: usize, file_name: &str) {
        let _ = (index, total_files, file_name);
    }

    /// Called when a file has been moved to its new name.
    ///
    /// # Arguments
    /// * `index`       — 1-indexed position in the batch
    /// * `total_files` — total files
    /// * `file_name`   — original file name
    /// * `new_name`    — destination file name (identifier + `.pdf`)
    fn on_file_renamed(&self, index: usize, total_files: usize, file_name: &str, new_name: &str) {
        let _ = (index, total_files, file_name, new_name);
    }

    /// Called when a file is skipped and left in the input directory.
    ///
    /// # Arguments
    /// * `index`       — 1-indexed position in the batch
    /// * `total_files` — total files
    /// * `file_name`   — original file name
    /// * `error`       — human-readable reason for the skip
    fn on_file_skipped(&self, index: usize, total_files: usize, file_name: &str, error: &str) {
        let _ = (index, total_files, file_name, error);
    }

    /// Called once after every file has been attempted.
    ///
    /// # Arguments
    /// * `total_files`   — total files in the batch
    /// * `renamed_count` — files that were moved without error
    fn on_batch_complete(&self, total_files: usize, renamed_count: usize) {
        let _ = (total_files, renamed_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::RenameConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: Arc<AtomicUsize>,
        renames: Arc<AtomicUsize>,
        skips: Arc<AtomicUsize>,
        started_total: Arc<AtomicUsize>,
        renamed_total: Arc<AtomicUsize>,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_batch_start(&self, total_files: usize) {
            self.started_total.store(total_files, Ordering::SeqCst);
        }

        fn on_file_start(&self, _index: usize, _total_files: usize, _file_name: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_renamed(
            &self,
            _index: usize,
            _total_files: usize,
            _file_name: &str,
            _new_name: &str,
        ) {
            self.renames.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_skipped(
            &self,
            _index: usize,
            _total_files: usize,
            _file_name: &str,
            _error: &str,
        ) {
            self.skips.fetch_add(1, Ordering::SeqCst);
        }

        fn on_batch_complete(&self, _total_files: usize, renamed_count: usize) {
            self.renamed_total.store(renamed_count, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_batch_start(5);
        cb.on_file_start(1, 5, "a.pdf");
        cb.on_file_renamed(1, 5, "a.pdf", "201234567.pdf");
        cb.on_file_skipped(2, 5, "b.pdf", "some error");
        cb.on_batch_complete(5, 4);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: Arc::new(AtomicUsize::new(0)),
            renames: Arc::new(AtomicUsize::new(0)),
            skips: Arc::new(AtomicUsize::new(0)),
            started_total: Arc::new(AtomicUsize::new(0)),
            renamed_total: Arc::new(AtomicUsize::new(0)),
        };

        tracker.on_batch_start(3);
        assert_eq!(tracker.started_total.load(Ordering::SeqCst), 3);

        tracker.on_file_start(1, 3, "a.pdf");
        tracker.on_file_renamed(1, 3, "a.pdf", "111.pdf");
        tracker.on_file_start(2, 3, "b.pdf");
        tracker.on_file_renamed(2, 3, "b.pdf", "222.pdf");
        tracker.on_file_start(3, 3, "c.pdf");
        tracker.on_file_skipped(3, 3, "c.pdf", "target exists");

        assert_eq!(tracker.starts.load(Ordering::SeqCst), 3);
        assert_eq!(tracker.renames.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.skips.load(Ordering::SeqCst), 1);

        tracker.on_batch_complete(3, 2);
        assert_eq!(tracker.renamed_total.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_batch_start(10);
        cb.on_file_start(1, 10, "a.pdf");
        cb.on_file_renamed(1, 10, "a.pdf", "1.pdf");
    }
}
