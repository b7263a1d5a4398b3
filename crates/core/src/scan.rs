//! Directory enumeration with per-entry error tolerance.
//!
//! The contract is partial success, never total failure: an entry that cannot
//! be read (permissions, unrepresentable encoding) is skipped with one
//! diagnostic and the scan continues. All returned paths are forward-slash
//! normalized.

use tracing::warn;
use walkdir::WalkDir;

use crate::classify::Classifier;
use crate::path::normalize_separators;
use crate::registry::{AssetCategory, NativeKind};

/// Enumerates immediate children of a directory and filters them through a
/// [`Classifier`]. Scans are synchronous and non-recursive.
pub struct DirectoryScanner {
    classifier: Classifier,
}

impl DirectoryScanner {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Immediate subdirectories of `path`.
    pub fn list_directories(&self, path: &str) -> Vec<String> {
        self.list_entries(path, true)
    }

    /// Immediate regular files of `path`.
    pub fn list_files(&self, path: &str) -> Vec<String> {
        self.list_entries(path, false)
    }

    /// Supported asset files in `path`: all images, then all scripts, then
    /// all models. Callers rely on that concatenation order.
    pub fn list_supported_assets(&self, path: &str) -> Vec<String> {
        let files = self.list_files(path);

        let mut assets = self
            .classifier
            .filter_by_category(&files, AssetCategory::Image);
        assets.extend(
            self.classifier
                .filter_by_category(&files, AssetCategory::Script),
        );
        assets.extend(
            self.classifier
                .filter_by_category(&files, AssetCategory::Model),
        );
        assets
    }

    /// Supported model source files in `path`.
    pub fn list_models(&self, path: &str) -> Vec<String> {
        let files = self.list_files(path);
        self.classifier
            .filter_by_category(&files, AssetCategory::Model)
    }

    /// Engine-native world files in `path`.
    pub fn list_worlds(&self, path: &str) -> Vec<String> {
        let files = self.list_files(path);
        self.classifier.filter_native(&files, NativeKind::World)
    }

    fn list_entries(&self, path: &str, directories: bool) -> Vec<String> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("Skipping unreadable entry under \"{path}\": {e}");
                        return None;
                    }
                };

                let wanted = if directories {
                    entry.file_type().is_dir()
                } else {
                    entry.file_type().is_file()
                };
                if !wanted {
                    return None;
                }

                match entry.path().to_str() {
                    Some(s) => Some(normalize_separators(s)),
                    None => {
                        warn!(
                            "Skipping entry with an unrepresentable name under \"{path}\": {:?}",
                            entry.path()
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExtensionRegistry;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn scanner() -> DirectoryScanner {
        DirectoryScanner::new(Classifier::new(Arc::new(ExtensionRegistry::with_builtin())))
    }

    fn touch(dir: &TempDir, name: &str) {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }

    #[test]
    fn files_and_directories_are_listed_separately() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "rock.png");
        touch(&dir, "notes.txt");
        std::fs::create_dir(dir.path().join("textures")).unwrap();

        let scanner = scanner();
        let root = dir.path().to_str().unwrap();

        let mut files = scanner.list_files(root);
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| !f.contains('\\')));
        assert!(files.iter().any(|f| f.ends_with("/rock.png")));

        let dirs = scanner.list_directories(root);
        assert_eq!(dirs.len(), 1);
        assert!(dirs[0].ends_with("/textures"));
    }

    #[test]
    fn missing_directory_yields_an_empty_listing() {
        let scanner = scanner();
        assert!(scanner.list_files("/definitely/not/here").is_empty());
        assert!(scanner.list_directories("/definitely/not/here").is_empty());
    }

    #[test]
    fn supported_assets_come_in_image_script_model_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "hero.fbx");
        touch(&dir, "rock.png");
        touch(&dir, "ai.lua");
        touch(&dir, "notes.txt");

        let assets = scanner().list_supported_assets(dir.path().to_str().unwrap());
        assert_eq!(assets.len(), 3);
        assert!(assets[0].ends_with("rock.png"));
        assert!(assets[1].ends_with("ai.lua"));
        assert!(assets[2].ends_with("hero.fbx"));
    }

    #[test]
    fn world_listing_matches_native_extension_only() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "level.pworld");
        touch(&dir, "level.world");

        let worlds = scanner().list_worlds(dir.path().to_str().unwrap());
        assert_eq!(worlds.len(), 1);
        assert!(worlds[0].ends_with("level.pworld"));
    }
}
