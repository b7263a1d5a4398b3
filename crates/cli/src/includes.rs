use std::path::Path;
use tracing::info;

use pathforge_core::resolve_includes;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = path.to_string_lossy();
    let dependencies = resolve_includes(&root);

    info!("{} dependencies for {}", dependencies.len(), root);
    for dependency in dependencies {
        println!("{dependency}");
    }

    Ok(())
}
