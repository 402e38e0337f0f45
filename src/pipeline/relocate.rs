//! Safe relocation: move a PDF to `<output_dir>/<identifier>.pdf` without
//! ever overwriting an existing file.
//!
//! ## Collision policy
//!
//! A name collision is data, not damage: two documents claiming the same
//! identifier usually means a duplicate scan. The first file keeps the name,
//! later ones stay in the input directory with a
//! [`FileError::DuplicateTarget`] so the operator can compare them by hand.
//!
//! The existence check and the rename are two separate syscalls. The batch
//! is the only writer of the output directory while it runs (files are
//! processed one at a time), which is the guarantee the check needs; the
//! cross-device path additionally uses `persist_noclobber`, which refuses
//! atomically.
//!
//! ## Cross-device moves
//!
//! `rename(2)` fails with `EXDEV` when the output directory lives on another
//! filesystem. The fallback copies into a temp file next to the destination,
//! persists it under the final name, then deletes the source. If that last
//! delete fails the copy is rolled back; if even the rollback fails, the
//! error reports that both copies remain on disk.

use crate::error::FileError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The destination for a given identifier: `<output_dir>/<identifier>.pdf`.
pub fn destination_path(output_dir: &Path, identifier: &str) -> PathBuf {
    output_dir.join(format!("{}.pdf", identifier))
}

/// Move `source` to `destination`, skipping instead of overwriting.
pub async fn safe_move(source: &Path, destination: &Path) -> Result<(), FileError> {
    let move_error = |detail: String| FileError::Move {
        file: source.to_path_buf(),
        target: destination.to_path_buf(),
        detail,
    };

    let occupied = tokio::fs::try_exists(destination)
        .await
        .map_err(|e| move_error(format!("cannot probe target: {}", e)))?;
    if occupied {
        return Err(FileError::DuplicateTarget {
            file: source.to_path_buf(),
            target: destination.to_path_buf(),
        });
    }

    match tokio::fs::rename(source, destination).await {
        Ok(()) => {
            debug!("Moved {} -> {}", source.display(), destination.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            copy_then_delete(source, destination).await
        }
        Err(e) => Err(move_error(e.to_string())),
    }
}

/// EXDEV fallback: copy to a temp file beside the destination, persist it
/// under the final name, then remove the source.
async fn copy_then_delete(source: &Path, destination: &Path) -> Result<(), FileError> {
    let move_error = |detail: String| FileError::Move {
        file: source.to_path_buf(),
        target: destination.to_path_buf(),
        detail,
    };

    let dir = destination.parent().unwrap_or(Path::new("."));
    let tmp = tempfile::Builder::new()
        .prefix(".pdf2name-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| move_error(format!("cannot create temp file: {}", e)))?;

    tokio::fs::copy(source, tmp.path())
        .await
        .map_err(|e| move_error(format!("copy failed: {}", e)))?;

    // Refuses if the destination appeared while we were copying.
    tmp.persist_noclobber(destination).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            FileError::DuplicateTarget {
                file: source.to_path_buf(),
                target: destination.to_path_buf(),
            }
        } else {
            move_error(format!("persist failed: {}", e.error))
        }
    })?;

    if let Err(e) = tokio::fs::remove_file(source).await {
        // Roll the copy back; leaving both halves would duplicate the file.
        let detail = match tokio::fs::remove_file(destination).await {
            Ok(()) => format!("source could not be removed after copy: {}", e),
            Err(rollback) => format!(
                "source could not be removed after copy: {}; rollback of the copy failed too ({}), both files remain",
                e, rollback
            ),
        };
        return Err(move_error(detail));
    }

    debug!(
        "Moved {} -> {} (cross-device copy)",
        source.display(),
        destination.display()
    );
    Ok(())
}
