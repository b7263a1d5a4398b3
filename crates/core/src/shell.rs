//! Host-shell integration.

use std::process::Command;
use tracing::warn;

/// Open `path` in the platform's file browser. Fire and forget: the spawned
/// process is not waited on and failure is only a diagnostic.
pub fn open_in_file_browser(path: &str) {
    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    if let Err(e) = Command::new(program).arg(path).spawn() {
        warn!("Failed to open \"{path}\" in the file browser: {e}");
    }
}
