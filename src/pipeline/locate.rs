//! Identifier location: pick the identifier line out of extracted text and
//! normalise it into a file name stem.
//!
//! The rules are deliberately dumb and deterministic:
//!
//! * the line is addressed by zero-based index into [`str::lines`] (so both
//!   `\n` and `\r\n` documents behave the same),
//! * trailing whitespace is trimmed, leading whitespace is kept,
//! * every [`IDENTIFIER_SEPARATOR`] is removed, wherever it appears,
//! * whatever remains is used verbatim — no validation, no character
//!   filtering. Garbage in, garbage file name out, by intent: the operator
//!   sees the wrong name immediately and fixes the source document.

use crate::error::FileError;
use std::path::Path;

/// The character stripped from identifier lines before use as a file name.
///
/// Identifiers arrive formatted for humans (`20-123456-7`); file names want
/// the compact form (`201234567`).
pub const IDENTIFIER_SEPARATOR: char = '-';

/// Normalise one raw text line into an identifier.
pub fn normalize_identifier(line: &str) -> String {
    line.trim_end().replace(IDENTIFIER_SEPARATOR, "")
}

/// Extract the identifier from `text` at the given zero-based line index.
///
/// Returns [`FileError::MissingLine`] when the document has too few lines,
/// carrying the actual line count so the skip message is diagnosable.
pub fn locate_identifier(
    text: &str,
    line_index: usize,
    file: &Path,
) -> Result<String, FileError> {
    match text.lines().nth(line_index) {
        Some(line) => Ok(normalize_identifier(line)),
        None => Err(FileError::MissingLine {
            file: file.to_path_buf(),
            line_index,
            line_count: text.lines().count(),
        }),
    }
}
