//! Extension registry: which file extensions belong to which asset category.
//!
//! The registry is populated once at startup (optionally extended through a
//! [`RegistryConfig`]) and immutable afterwards. Consumers share it through an
//! `Arc`, so concurrent readers need no synchronization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::util::to_uppercase;

/// Category a foreign (import-source) asset file can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Image,
    Audio,
    Model,
    Shader,
    Script,
    Font,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 6] = [
        AssetCategory::Image,
        AssetCategory::Audio,
        AssetCategory::Model,
        AssetCategory::Shader,
        AssetCategory::Script,
        AssetCategory::Font,
    ];
}

/// Engine-native serialized asset kinds. Each kind has exactly one canonical
/// extension, distinct from any foreign format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Texture,
    Model,
    Material,
    Mesh,
    World,
    Audio,
    Shader,
    Font,
    Prefab,
}

impl NativeKind {
    pub const ALL: [NativeKind; 9] = [
        NativeKind::Texture,
        NativeKind::Model,
        NativeKind::Material,
        NativeKind::Mesh,
        NativeKind::World,
        NativeKind::Audio,
        NativeKind::Shader,
        NativeKind::Font,
        NativeKind::Prefab,
    ];

    /// The canonical extension for this kind. Fixed at compile time; native
    /// extensions are matched exactly, never case-insensitively.
    pub fn extension(self) -> &'static str {
        match self {
            NativeKind::Texture => ".ptex",
            NativeKind::Model => ".pmodel",
            NativeKind::Material => ".pmat",
            NativeKind::Mesh => ".pmesh",
            NativeKind::World => ".pworld",
            NativeKind::Audio => ".paudio",
            NativeKind::Shader => ".pshader",
            NativeKind::Font => ".pfont",
            NativeKind::Prefab => ".pprefab",
        }
    }
}

/// Extra extensions to merge into the built-in tables, keyed by category.
///
/// Loaded from JSON, e.g. `{"image": [".avif"], "audio": [".opus"]}`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryConfig(pub HashMap<AssetCategory, Vec<String>>);

impl RegistryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Immutable table of recognized extensions per [`AssetCategory`].
///
/// Within a category the set is ordered and duplicate-free; every entry is
/// lowercase and carries its leading dot.
pub struct ExtensionRegistry {
    formats: HashMap<AssetCategory, Vec<String>>,
}

impl ExtensionRegistry {
    /// Registry with the built-in format tables only.
    pub fn with_builtin() -> Self {
        RegistryBuilder::new().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registered extensions for `category`, in registration order.
    pub fn extensions(&self, category: AssetCategory) -> &[String] {
        self.formats
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `ext` (leading dot included) is registered under `category`.
    ///
    /// Matching follows the original engine rule: an extension matches if it
    /// equals the registered lowercase form or its fully-uppercased form.
    /// Mixed-case variants do not match; there is no general case folding.
    pub fn matches(&self, ext: &str, category: AssetCategory) -> bool {
        self.extensions(category)
            .iter()
            .any(|format| ext == format.as_str() || ext == to_uppercase(format))
    }

    /// Whether the extension of `path` is registered under `category`.
    /// A path without an extension belongs to no category.
    pub fn is_in_category(&self, path: &str, category: AssetCategory) -> bool {
        match crate::path::extension(path) {
            Some(ext) => self.matches(&ext, category),
            None => false,
        }
    }

    /// The single canonical extension for an engine-native kind.
    pub fn native_extension(&self, kind: NativeKind) -> &'static str {
        kind.extension()
    }
}

/// Builder for [`ExtensionRegistry`]; starts from the built-in tables.
pub struct RegistryBuilder {
    formats: HashMap<AssetCategory, Vec<String>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        let mut formats = HashMap::new();
        formats.insert(
            AssetCategory::Image,
            to_strings(&[
                ".jpg", ".jpeg", ".png", ".bmp", ".tga", ".dds", ".exr", ".gif", ".hdr", ".ico",
                ".pcx", ".pbm", ".pgm", ".ppm", ".psd", ".sgi", ".tiff", ".tif", ".webp", ".xpm",
            ]),
        );
        formats.insert(
            AssetCategory::Audio,
            to_strings(&[
                ".aiff", ".flac", ".it", ".mid", ".mod", ".mp2", ".mp3", ".ogg", ".s3m", ".wav",
                ".wma", ".xm",
            ]),
        );
        formats.insert(
            AssetCategory::Model,
            to_strings(&[
                ".3ds", ".obj", ".fbx", ".blend", ".dae", ".gltf", ".glb", ".lwo", ".md2", ".md3",
                ".md5", ".mdl", ".ms3d", ".ply", ".stl", ".smd", ".x",
            ]),
        );
        formats.insert(
            AssetCategory::Shader,
            to_strings(&[".hlsl", ".glsl", ".wgsl"]),
        );
        formats.insert(AssetCategory::Script, to_strings(&[".lua"]));
        formats.insert(
            AssetCategory::Font,
            to_strings(&[
                ".ttf", ".ttc", ".cff", ".woff", ".woff2", ".otf", ".otc", ".pfa", ".pfb", ".fnt",
                ".bdf",
            ]),
        );

        Self { formats }
    }

    /// Register one extra extension. Lowercased, a leading dot is added when
    /// missing, duplicates within the category are skipped.
    pub fn add_extension(mut self, category: AssetCategory, ext: &str) -> Self {
        let mut normalized = ext.to_lowercase();
        if !normalized.starts_with('.') {
            normalized.insert(0, '.');
        }

        let entries = self.formats.entry(category).or_default();
        if !entries.contains(&normalized) {
            entries.push(normalized);
        }
        self
    }

    /// Merge every extension from `config` into the tables.
    pub fn apply_config(mut self, config: &RegistryConfig) -> Self {
        for (category, extensions) in &config.0 {
            for ext in extensions {
                self = self.add_extension(*category, ext);
            }
        }
        self
    }

    pub fn build(self) -> ExtensionRegistry {
        ExtensionRegistry {
            formats: self.formats,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn to_strings(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|e| e.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_extensions_match_lower_and_upper() {
        let registry = ExtensionRegistry::with_builtin();

        for category in AssetCategory::ALL {
            for ext in registry.extensions(category).to_vec() {
                assert!(registry.matches(&ext, category), "{ext} should match");
                assert!(
                    registry.matches(&to_uppercase(&ext), category),
                    "{ext} uppercased should match"
                );
            }
        }
    }

    #[test]
    fn mixed_case_does_not_match() {
        let registry = ExtensionRegistry::with_builtin();
        assert!(registry.matches(".png", AssetCategory::Image));
        assert!(registry.matches(".PNG", AssetCategory::Image));
        assert!(!registry.matches(".Png", AssetCategory::Image));
    }

    #[test]
    fn unrelated_extension_does_not_match() {
        let registry = ExtensionRegistry::with_builtin();
        assert!(!registry.matches(".docx", AssetCategory::Image));
        assert!(!registry.is_in_category("notes.docx", AssetCategory::Audio));
    }

    #[test]
    fn missing_extension_belongs_to_no_category() {
        let registry = ExtensionRegistry::with_builtin();
        for category in AssetCategory::ALL {
            assert!(!registry.is_in_category("readme", category));
        }
    }

    #[test]
    fn builder_normalizes_and_deduplicates() {
        let registry = ExtensionRegistry::builder()
            .add_extension(AssetCategory::Image, "AVIF")
            .add_extension(AssetCategory::Image, ".avif")
            .build();

        let avif: Vec<_> = registry
            .extensions(AssetCategory::Image)
            .iter()
            .filter(|e| e.as_str() == ".avif")
            .collect();
        assert_eq!(avif.len(), 1);
        assert!(registry.matches(".avif", AssetCategory::Image));
    }

    #[test]
    fn config_merges_extra_extensions() {
        let mut map = HashMap::new();
        map.insert(AssetCategory::Audio, vec![".opus".to_string()]);
        let config = RegistryConfig(map);

        let registry = ExtensionRegistry::builder().apply_config(&config).build();
        assert!(registry.matches(".opus", AssetCategory::Audio));
        assert!(registry.matches(".OPUS", AssetCategory::Audio));
    }

    #[test]
    fn registry_config_parses_json() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"image": [".avif"], "script": [".wren"]}"#).unwrap();
        let registry = ExtensionRegistry::builder().apply_config(&config).build();
        assert!(registry.matches(".avif", AssetCategory::Image));
        assert!(registry.matches(".wren", AssetCategory::Script));
    }

    #[test]
    fn native_extensions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for kind in NativeKind::ALL {
            assert!(seen.insert(kind.extension()), "duplicate native extension");
        }
    }
}
