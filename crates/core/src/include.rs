//! Recursive resolution of textual include dependencies.
//!
//! A dependency is any line containing the literal `#include "…"` directive;
//! the quoted target is resolved against the including file's directory.
//! The result lists every direct include of the root first, then each direct
//! include's own flattened nested includes, in direct order. Duplicates are
//! preserved.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::path;

const INCLUDE_DIRECTIVE: &str = "#include \"";

static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#include "([^"]*)""#).expect("directive pattern is valid"));

/// Transitive include dependencies of `file_path`, discovery-ordered.
///
/// An unreadable file simply has no dependencies. A cycle of mutual or self
/// includes is broken by a set of in-progress canonical paths threaded
/// through the recursion: the re-entered file logs one warning and
/// contributes an empty expansion, so acyclic graphs keep their documented
/// ordering and duplicate behavior.
pub fn resolve_includes(file_path: &str) -> Vec<String> {
    let mut in_progress = HashSet::new();
    resolve_guarded(file_path, &mut in_progress)
}

fn resolve_guarded(file_path: &str, in_progress: &mut HashSet<PathBuf>) -> Vec<String> {
    let key = canonical_key(file_path);
    if !in_progress.insert(key.clone()) {
        warn!("Include cycle detected at \"{file_path}\"; skipping re-expansion");
        return Vec::new();
    }

    let dependencies = expand(file_path, in_progress);
    in_progress.remove(&key);
    dependencies
}

fn expand(file_path: &str, in_progress: &mut HashSet<PathBuf>) -> Vec<String> {
    // Missing or unreadable files are treated as having no dependencies.
    let source = match std::fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(_) => return Vec::new(),
    };

    // Fast path: no directive anywhere in the text.
    if !source.contains(INCLUDE_DIRECTIVE) {
        return Vec::new();
    }

    let directory = path::directory(file_path);

    let mut dependencies = Vec::new();
    for line in source.lines() {
        if !line.contains(INCLUDE_DIRECTIVE) {
            continue;
        }
        if let Some(captures) = DIRECTIVE_RE.captures(line) {
            dependencies.push(format!("{directory}{}", &captures[1]));
        }
    }

    // Snapshot the direct list so recursion does not re-scan paths appended
    // during this same expansion pass.
    let direct = dependencies.clone();
    for dependency in &direct {
        dependencies.extend(resolve_guarded(dependency, in_progress));
    }

    dependencies
}

/// Cycle-detection key: the canonical path when the file exists, otherwise
/// its absolute form, otherwise the raw path.
fn canonical_key(file_path: &str) -> PathBuf {
    let raw = Path::new(file_path);
    std::fs::canonicalize(raw)
        .or_else(|_| std::path::absolute(raw))
        .unwrap_or_else(|_| raw.to_path_buf())
}
