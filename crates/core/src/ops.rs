//! Best-effort filesystem mutations.
//!
//! These are plain, non-transactional operations with the same degradation
//! policy as the rest of the crate: a failure is a diagnostic plus a benign
//! return value, never a panic.

use std::io::ErrorKind;
use tracing::warn;

use crate::path;

pub fn exists(p: &str) -> bool {
    match std::fs::exists(p) {
        Ok(exists) => exists,
        Err(e) => {
            warn!("Failed to check existence of \"{p}\": {e}");
            false
        }
    }
}

pub fn is_file(p: &str) -> bool {
    match std::fs::metadata(p) {
        Ok(meta) => meta.is_file(),
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            warn!("Failed to stat \"{p}\": {e}");
            false
        }
    }
}

pub fn is_directory(p: &str) -> bool {
    match std::fs::metadata(p) {
        Ok(meta) => meta.is_dir(),
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            warn!("Failed to stat \"{p}\": {e}");
            false
        }
    }
}

/// Create `p` and any missing parents.
pub fn create_directory(p: &str) -> bool {
    match std::fs::create_dir_all(p) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to create directory \"{p}\": {e}");
            false
        }
    }
}

/// Remove `p` and everything below it.
pub fn delete_directory(p: &str) -> bool {
    match std::fs::remove_dir_all(p) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to delete directory \"{p}\": {e}");
            false
        }
    }
}

/// Remove a single file; refuses directories.
pub fn delete_file(p: &str) -> bool {
    if is_directory(p) {
        return false;
    }
    match std::fs::remove_file(p) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to delete file \"{p}\": {e}");
            false
        }
    }
}

/// Copy `source` to `destination`, creating the destination directory when
/// missing. Copying a path onto itself is a no-op success.
pub fn copy_file(source: &str, destination: &str) -> bool {
    if source == destination {
        return true;
    }

    let destination_dir = path::directory(destination);
    if !destination_dir.is_empty() && !exists(&destination_dir) {
        create_directory(&destination_dir);
    }

    match std::fs::copy(source, destination) {
        Ok(_) => true,
        Err(e) => {
            warn!("Failed to copy \"{source}\" to \"{destination}\": {e}");
            false
        }
    }
}
