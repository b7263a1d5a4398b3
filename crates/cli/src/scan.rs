use std::path::Path;
use std::sync::Arc;
use tracing::info;

use pathforge_core::registry::ExtensionRegistry;
use pathforge_core::{Classifier, DirectoryScanner};

pub fn run(
    path: &Path,
    all: bool,
    dirs: bool,
    registry: Arc<ExtensionRegistry>,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = path.to_string_lossy();
    let scanner = DirectoryScanner::new(Classifier::new(registry));

    let entries = if dirs {
        scanner.list_directories(&root)
    } else if all {
        scanner.list_files(&root)
    } else {
        scanner.list_supported_assets(&root)
    };

    info!("{} entries under {}", entries.len(), root);
    for entry in entries {
        println!("{entry}");
    }

    Ok(())
}
