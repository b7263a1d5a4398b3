use pathforge_core::path;
use pathforge_core::registry::ExtensionRegistry;
use std::sync::Arc;

pub fn run(target: &str, registry: Arc<ExtensionRegistry>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", path::nativize(target, &registry));
    Ok(())
}
