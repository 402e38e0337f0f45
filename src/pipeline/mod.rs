//! Pipeline stages for batch PDF renaming.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the text-extraction backend) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! discover ──▶ extract ──▶ locate ──▶ relocate
//! (scan dir)   (pdfium)    (line 13)  (safe move)
//! ```
//!
//! 1. [`discover`] — ensure the working directories exist and list the input
//!    directory's PDF files in a stable order
//! 2. [`extract`]  — pull the full plain text out of one document; runs in
//!    `spawn_blocking` because pdfium is not async-safe
//! 3. [`locate`]   — pick the identifier line out of the text and normalise it
//! 4. [`relocate`] — move the file to `<output>/<identifier>.pdf` without ever
//!    overwriting an existing file

pub mod discover;
pub mod extract;
pub mod locate;
pub mod relocate;
