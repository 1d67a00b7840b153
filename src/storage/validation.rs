//! Path validation
//!
//! Lexical path resolution and the traversal guard that keeps every write
//! inside the storage root.

use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// The target of an upload may not exist yet, so `canonicalize` is not an
/// option. A `..` that cannot be collapsed is kept, which guarantees the
/// parent check below rejects it.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Resolve an uploaded name against the root and enforce the traversal
/// guard: the normalized target's parent directory must be exactly the
/// root. This is the decisive check that stops names like
/// `../../etc/passwd` from landing outside the root.
///
/// `root` must already be absolute and normalized.
pub fn resolve_and_validate_target(root: &Path, name: &str) -> Result<PathBuf, StorageError> {
    if name.trim().is_empty() {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }

    let target = normalize_lexically(&root.join(name));

    match target.parent() {
        Some(parent) if parent == root => Ok(target),
        _ => Err(StorageError::PathTraversal(name.to_string())),
    }
}
