//! Category predicates composed from the path resolver and the registry.

use std::sync::Arc;

use crate::path;
use crate::registry::{AssetCategory, ExtensionRegistry, NativeKind};

/// Answers "is this a supported/engine file of category X" for raw paths.
/// Pure predicates; the registry is shared, read-only state.
#[derive(Clone)]
pub struct Classifier {
    registry: Arc<ExtensionRegistry>,
}

impl Classifier {
    pub fn new(registry: Arc<ExtensionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Whether `path` is a supported import source for `category`.
    ///
    /// The Image category additionally accepts the engine's native texture
    /// extension, so imported textures keep classifying as images.
    pub fn is_supported(&self, path: &str, category: AssetCategory) -> bool {
        if self.registry.is_in_category(path, category) {
            return true;
        }
        category == AssetCategory::Image && self.is_native(path, NativeKind::Texture)
    }

    /// Whether `path` carries the exact native extension of `kind`.
    /// Native extensions match exactly; there is no case folding here.
    pub fn is_native(&self, path: &str, kind: NativeKind) -> bool {
        path::extension(path).is_some_and(|ext| ext == kind.extension())
    }

    /// Whether any native kind matches `path`.
    pub fn is_any_native(&self, path: &str) -> bool {
        match path::extension(path) {
            Some(ext) => NativeKind::ALL.iter().any(|kind| ext == kind.extension()),
            None => false,
        }
    }

    /// Paths from `paths` supported under `category`, input order preserved,
    /// duplicates kept.
    pub fn filter_by_category(&self, paths: &[String], category: AssetCategory) -> Vec<String> {
        paths
            .iter()
            .filter(|p| self.is_supported(p, category))
            .cloned()
            .collect()
    }

    /// Paths from `paths` carrying the native extension of `kind`.
    pub fn filter_native(&self, paths: &[String], kind: NativeKind) -> Vec<String> {
        paths
            .iter()
            .filter(|p| self.is_native(p, kind))
            .cloned()
            .collect()
    }
}
