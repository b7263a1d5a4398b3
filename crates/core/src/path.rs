//! Path decomposition and rewriting.
//!
//! A path here is a semantic value recomputed from the raw string on demand:
//! `directory + file_stem + extension` reconstructs the input whenever all
//! three parts exist. None of these operations fail hard; malformed input
//! degrades to an empty/identity result plus one `warn!` diagnostic, because
//! they are called pervasively and must never take the caller down.

use std::path::{Component, Path, PathBuf};
use tracing::warn;

use crate::registry::{AssetCategory, ExtensionRegistry, NativeKind};

/// Nativization priority: first matching category wins. A path that happens
/// to match two categories is resolved by this order.
const NATIVIZE_PRIORITY: [(AssetCategory, NativeKind); 5] = [
    (AssetCategory::Audio, NativeKind::Audio),
    (AssetCategory::Image, NativeKind::Texture),
    (AssetCategory::Model, NativeKind::Model),
    (AssetCategory::Font, NativeKind::Font),
    (AssetCategory::Shader, NativeKind::Shader),
];

/// Substring after the last separator; the whole input when there is none.
fn file_name_part(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Last path component, or None when the path is empty or ends in a separator.
pub fn file_name(path: &str) -> Option<String> {
    let name = file_name_part(path);
    if name.is_empty() {
        warn!("\"{path}\" has no file name");
        return None;
    }
    Some(name.to_string())
}

/// File name with the final `.extension` removed. A name without a dot (or
/// with nothing before it, like `.env`) has no stem.
pub fn file_stem(path: &str) -> Option<String> {
    let name = file_name_part(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[..idx].to_string()),
        _ => {
            warn!("Failed to extract file stem from \"{path}\"");
            None
        }
    }
}

/// Substring up to and including the last separator; empty when none exists.
pub fn directory(path: &str) -> String {
    match path.rfind(['/', '\\']) {
        Some(idx) => path[..=idx].to_string(),
        None => {
            warn!("Failed to extract directory from \"{path}\"");
            String::new()
        }
    }
}

/// Final `.ext` component including the dot. Callers compare this
/// case-insensitively through the registry's match rule.
pub fn extension(path: &str) -> Option<String> {
    let name = file_name_part(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(name[idx..].to_string()),
        _ => {
            warn!("\"{path}\" has no extension");
            None
        }
    }
}

/// `directory(path) + file_stem(path)`.
pub fn path_without_extension(path: &str) -> String {
    let mut result = directory(path);
    if let Some(stem) = file_stem(path) {
        result.push_str(&stem);
    }
    result
}

/// Map a foreign asset path to its engine-native counterpart.
///
/// Categories are tried in the fixed [`NATIVIZE_PRIORITY`] order and the
/// first match substitutes that kind's canonical extension. When nothing
/// matches (including an already-native path) the input is returned
/// unchanged, which makes nativization idempotent.
pub fn nativize(path: &str, registry: &ExtensionRegistry) -> String {
    if let Some(ext) = extension(path) {
        for (category, kind) in NATIVIZE_PRIORITY {
            if registry.matches(&ext, category) {
                return format!("{}{}", path_without_extension(path), kind.extension());
            }
        }
    }

    warn!("Failed to nativize \"{path}\"");
    path.to_string()
}

/// Relative form of `path` with respect to the current working directory.
pub fn relative_path(path: &str) -> String {
    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("Failed to read the working directory: {e}");
            return path.to_string();
        }
    };
    relative_path_from(path, &base)
}

/// Relative form of `path` with respect to `base`.
///
/// An already-relative path is returned unchanged. When the two absolute
/// forms live under different roots (e.g. drives) no relative path exists
/// and the absolute form of `path` is returned. Otherwise the paths are
/// walked from the root to their divergence point, one `..` is emitted per
/// remaining base component, and the remaining path components follow.
/// Output is forward-slash normalized.
pub fn relative_path_from(path: &str, base: &Path) -> String {
    if Path::new(path).is_relative() {
        return path.to_string();
    }

    let absolute = absolute_or_identity(Path::new(path));
    let base = absolute_or_identity(base);

    if root_of(&absolute) != root_of(&base) {
        return normalize_separators(&absolute.to_string_lossy());
    }

    let path_components: Vec<Component> = absolute.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let mut divergence = 0;
    while divergence < path_components.len()
        && divergence < base_components.len()
        && path_components[divergence] == base_components[divergence]
    {
        divergence += 1;
    }

    let mut segments: Vec<String> = Vec::new();
    for _ in divergence..base_components.len() {
        segments.push("..".to_string());
    }
    for component in &path_components[divergence..] {
        segments.push(component.as_os_str().to_string_lossy().into_owned());
    }

    segments.join("/")
}

/// Current working directory, forward-slash normalized; empty on failure.
pub fn working_directory() -> String {
    match std::env::current_dir() {
        Ok(dir) => normalize_separators(&dir.to_string_lossy()),
        Err(e) => {
            warn!("Failed to read the working directory: {e}");
            String::new()
        }
    }
}

/// Parent of `path` without a trailing separator; empty when there is none.
pub fn parent_directory(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            normalize_separators(&parent.to_string_lossy())
        }
        _ => {
            warn!("\"{path}\" has no parent directory");
            String::new()
        }
    }
}

/// Root of `path` (prefix and/or root directory); empty for relative paths.
pub fn root_directory(path: &str) -> String {
    let root = root_of(Path::new(path));
    if root.as_os_str().is_empty() {
        warn!("\"{path}\" has no root directory");
        return String::new();
    }
    normalize_separators(&root.to_string_lossy())
}

pub(crate) fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn absolute_or_identity(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to make {:?} absolute: {e}", path);
            path.to_path_buf()
        }
    }
}

fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}
