//! End-to-end behavior against a real filesystem.

use std::sync::Arc;

use pathforge_core::registry::{AssetCategory, ExtensionRegistry, RegistryConfig};
use pathforge_core::{Classifier, DirectoryScanner, path, resolve_includes};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[cfg(unix)]
#[test]
fn unrepresentable_entry_is_skipped_without_failing_the_scan() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    write(&dir, "a.png", "");
    write(&dir, "b.wav", "");

    // A filename that is not valid UTF-8 cannot be represented in the
    // listing; the scan must skip it and keep the readable entries.
    let bad = dir.path().join(OsStr::from_bytes(b"bad-\xff-name"));
    std::fs::write(&bad, b"").unwrap();

    let scanner = DirectoryScanner::new(Classifier::new(Arc::new(
        ExtensionRegistry::with_builtin(),
    )));
    let mut files = scanner.list_files(dir.path().to_str().unwrap());
    files.sort();

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("/a.png"));
    assert!(files[1].ends_with("/b.wav"));
}

#[test]
fn scan_classify_nativize_pipeline() {
    let dir = TempDir::new().unwrap();
    write(&dir, "rock.png", "");
    write(&dir, "boom.wav", "");
    write(&dir, "enemy.lua", "");
    write(&dir, "track.opus", "");

    // Registry extended at startup from a config value, immutable afterwards.
    let config: RegistryConfig = serde_json::from_str(r#"{"audio": [".opus"]}"#).unwrap();
    let registry = Arc::new(ExtensionRegistry::builder().apply_config(&config).build());
    let scanner = DirectoryScanner::new(Classifier::new(registry.clone()));

    let assets = scanner.list_supported_assets(dir.path().to_str().unwrap());
    assert_eq!(assets.len(), 2); // rock.png then enemy.lua

    let classifier = scanner.classifier();
    assert!(classifier.is_supported("track.opus", AssetCategory::Audio));
    assert_eq!(path::nativize("track.opus", &registry), "track.paudio");
    assert_eq!(
        path::nativize(&path::nativize("boom.wav", &registry), &registry),
        "boom.paudio"
    );
}

#[test]
fn includes_resolve_across_subdirectories() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("common")).unwrap();

    let lighting = root.path().join("common").join("lighting.hlsl");
    std::fs::write(&lighting, "float3 light();\n").unwrap();
    let shared = root.path().join("common").join("shared.hlsl");
    std::fs::write(&shared, "#include \"lighting.hlsl\"\n").unwrap();

    let main = write(&root, "main.hlsl", "#include \"common/shared.hlsl\"\nvoid main() {}\n");

    let deps = resolve_includes(&main);
    assert_eq!(deps.len(), 2);
    assert!(deps[0].ends_with("common/shared.hlsl"));
    assert!(deps[1].ends_with("common/lighting.hlsl"));
}
