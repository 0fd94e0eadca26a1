//! Lexical path normalization.
//!
//! Canonical paths are the identity of a source file during resolution:
//! two files are the same file exactly when their canonical paths compare
//! equal. Nothing in this module touches the filesystem beyond querying the
//! current working directory, so symbolic links are not followed and the
//! target of a path does not need to exist.

use std::{
    env,
    path::{Component, Path, PathBuf},
};

use crate::error::{Error, Result};

/// Lexically clean `path`.
///
/// - `.` segments are dropped
/// - `..` removes the preceding normal segment
/// - `..` directly beneath the root of an absolute path is dropped
/// - leading `..` segments of a relative path are kept
/// - an empty result becomes `.`
pub fn clean<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut cleaned = PathBuf::new();
    // Normal segments currently in `cleaned` that a `..` may remove
    let mut depth = 0usize;

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => cleaned.push(component),
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => {
                cleaned.pop();
                depth -= 1;
            }
            Component::ParentDir if cleaned.has_root() => {}
            Component::ParentDir => cleaned.push(".."),
            Component::Normal(segment) => {
                cleaned.push(segment);
                depth += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Resolve `path` against the current working directory and clean it.
pub fn absolutize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(clean(path));
    }
    let cwd = env::current_dir().map_err(|source| Error::Absolutize {
        source,
        path: path.to_owned(),
    })?;
    Ok(clean(cwd.join(path)))
}

/// Turn the raw `reference` from a directive into a canonical path.
///
/// Relative references are resolved against `dir`, the absolute directory of
/// the including file. Absolute references replace `dir` entirely when
/// joined, so both cases funnel through the same final [`clean`].
pub fn canonical_path<P: AsRef<Path>>(reference: P, dir: &Path) -> PathBuf {
    clean(dir.join(reference))
}
