//! Configuration types for a batch rename run.
//!
//! All batch behaviour is controlled through [`RenameConfig`], built via its
//! [`RenameConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share configs across threads, log them, and diff two runs to understand
//! why their outputs differ.

use crate::error::RenamerError;
use crate::pipeline::extract::TextExtractor;
use crate::progress::BatchProgressCallback;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default directory scanned for incoming PDFs.
pub const DEFAULT_INPUT_DIR: &str = "PDF files";

/// Default directory renamed PDFs are moved into.
pub const DEFAULT_OUTPUT_DIR: &str = "PDF renamed";

/// Default zero-based index of the text line holding the identifier.
///
/// Index 13 is the fourteenth line of extracted text, where the document
/// identifier sits in the forms this tool was built around.
pub const DEFAULT_IDENTIFIER_LINE_INDEX: usize = 13;

/// Configuration for a batch rename run.
///
/// Built via [`RenameConfig::builder()`] or using
/// [`RenameConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2name::RenameConfig;
///
/// let config = RenameConfig::builder()
///     .input_dir("scans")
///     .output_dir("done")
///     .identifier_line_index(7)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct RenameConfig {
    /// Directory scanned for `.pdf` files. Created if absent. Default: `PDF files`.
    ///
    /// Relative paths resolve against the process working directory exactly
    /// once, at the start of the run; the batch never changes directory.
    pub input_dir: PathBuf,

    /// Directory renamed files are moved into. Created if absent. Default: `PDF renamed`.
    pub output_dir: PathBuf,

    /// Zero-based index of the extracted-text line holding the identifier.
    /// Default: 13 (the fourteenth line).
    ///
    /// Documents with fewer lines are skipped with
    /// [`crate::error::FileError::MissingLine`], not failed.
    pub identifier_line_index: usize,

    /// Pre-constructed text extractor. Takes precedence over the built-in
    /// pdfium extractor. The main use is injecting a fake in tests so batch
    /// behaviour can be exercised without a pdfium library or real PDFs.
    pub extractor: Option<Arc<dyn TextExtractor>>,

    /// Optional progress callback receiving per-file events.
    pub progress_callback: Option<Arc<dyn BatchProgressCallback>>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            identifier_line_index: DEFAULT_IDENTIFIER_LINE_INDEX,
            extractor: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for RenameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenameConfig")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("identifier_line_index", &self.identifier_line_index)
            .field("extractor", &self.extractor.as_ref().map(|_| "<dyn TextExtractor>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl RenameConfig {
    /// Create a new builder for `RenameConfig`.
    pub fn builder() -> RenameConfigBuilder {
        RenameConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenameConfig`].
#[derive(Debug)]
pub struct RenameConfigBuilder {
    config: RenameConfig,
}

impl RenameConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn identifier_line_index(mut self, index: usize) -> Self {
        self.config.identifier_line_index = index;
        self
    }

    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.config.extractor = Some(extractor);
        self
    }

    pub fn progress_callback(mut self, callback: Arc<dyn BatchProgressCallback>) -> Self {
        self.config.progress_callback = Some(callback);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// The directories are compared as written; they are not required to
    /// exist yet, so no canonicalisation happens here.
    pub fn build(self) -> Result<RenameConfig, RenamerError> {
        let c = &self.config;
        if c.input_dir.as_os_str().is_empty() {
            return Err(RenamerError::InvalidConfig(
                "Input directory must not be empty".into(),
            ));
        }
        if c.output_dir.as_os_str().is_empty() {
            return Err(RenamerError::InvalidConfig(
                "Output directory must not be empty".into(),
            ));
        }
        if c.input_dir == c.output_dir {
            return Err(RenamerError::InvalidConfig(format!(
                "Input and output directories must differ, both are '{}'",
                c.input_dir.display()
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = RenameConfig::default();
        assert_eq!(c.input_dir, PathBuf::from("PDF files"));
        assert_eq!(c.output_dir, PathBuf::from("PDF renamed"));
        assert_eq!(c.identifier_line_index, 13);
        assert!(c.extractor.is_none());
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_overrides_stick() {
        let c = RenameConfig::builder()
            .input_dir("in")
            .output_dir("out")
            .identifier_line_index(0)
            .build()
            .unwrap();
        assert_eq!(c.input_dir, PathBuf::from("in"));
        assert_eq!(c.output_dir, PathBuf::from("out"));
        assert_eq!(c.identifier_line_index, 0);
    }

    #[test]
    fn same_input_and_output_dir_is_rejected() {
        let err = RenameConfig::builder()
            .input_dir("same")
            .output_dir("same")
            .build()
            .unwrap_err();
        assert!(matches!(err, RenamerError::InvalidConfig(_)));
    }

    #[test]
    fn empty_dirs_are_rejected() {
        assert!(RenameConfig::builder().input_dir("").build().is_err());
        assert!(RenameConfig::builder().output_dir("").build().is_err());
    }

    #[test]
    fn debug_elides_trait_objects() {
        let c = RenameConfig::default();
        let dbg = format!("{:?}", c);
        assert!(dbg.contains("identifier_line_index"));
        assert!(!dbg.contains("dyn TextExtractor {"));
    }
}
