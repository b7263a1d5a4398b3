use std::sync::Arc;

use pathforge_core::registry::{AssetCategory, ExtensionRegistry, NativeKind};
use pathforge_core::{Classifier, path};

pub fn run(
    target: &str,
    registry: Arc<ExtensionRegistry>,
) -> Result<(), Box<dyn std::error::Error>> {
    let classifier = Classifier::new(registry.clone());

    let categories: Vec<AssetCategory> = AssetCategory::ALL
        .into_iter()
        .filter(|c| classifier.is_supported(target, *c))
        .collect();
    let native: Vec<NativeKind> = NativeKind::ALL
        .into_iter()
        .filter(|k| classifier.is_native(target, *k))
        .collect();

    if categories.is_empty() && native.is_empty() {
        println!("{target}: unclassified");
        return Ok(());
    }

    for category in categories {
        println!("{target}: supported {category:?} file");
    }
    for kind in native {
        println!("{target}: native {kind:?} file");
    }
    println!("native counterpart: {}", path::nativize(target, &registry));

    Ok(())
}
