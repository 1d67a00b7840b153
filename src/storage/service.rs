//! Storage service
//!
//! Filesystem-backed storage for uploaded files. Every operation is a single
//! blocking std::fs call sequence; the async HTTP layer is responsible for
//! hopping to a blocking thread before calling in here.

use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::validation::{normalize_lexically, resolve_and_validate_target};

/// Gatekeeper between untrusted uploaded names/bytes and one root directory.
///
/// Saves replace any existing file of the same name. Two concurrent saves to
/// the same name are serialized only by the filesystem itself (last write
/// wins).
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at `root`. The directory does not have to exist
    /// yet; call [`initialize`](Self::initialize) before saving.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        if root.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(StorageError::InvalidRoot(
                "storage location can not be empty".to_string(),
            ));
        }

        // Absolutized lexically: the root may not exist yet, so no
        // canonicalize here either.
        let root = normalize_lexically(&std::path::absolute(root)?);
        Ok(Self { root })
    }

    /// The absolute storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the root directory exists (idempotent create-if-missing)
    pub fn initialize(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            error!("Failed to create storage root {}: {}", self.root.display(), e);
            StorageError::IoError(e)
        })?;

        info!("Storage root ready at {}", self.root.display());
        Ok(())
    }

    /// Write `data` to `name` under the root, replacing any existing file
    /// with that name.
    pub fn save(&self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        if data.is_empty() {
            return Err(StorageError::EmptyUpload);
        }

        let target = resolve_and_validate_target(&self.root, name)?;

        fs::write(&target, data).map_err(|e| {
            error!("Failed to write {}: {}", target.display(), e);
            StorageError::IoError(e)
        })?;

        info!("Stored {} ({} bytes)", target.display(), data.len());
        Ok(())
    }

    /// List the file names that are immediate children of the root.
    ///
    /// Non-recursive: subdirectories and their contents are not reported.
    /// The listing is recomputed from the directory on every call.
    pub fn load_all(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        Ok(names)
    }

    /// Join `name` onto the root with no existence check and no traversal
    /// guard. Callers that act on the result must validate it first; the
    /// read path does so in [`load_as_resource`](Self::load_as_resource).
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Resolve `name` to an existing, readable regular file under the root.
    ///
    /// The same traversal guard as `save` applies; a name that escapes the
    /// root reports `FileNotFound` rather than an error that would reveal
    /// the root layout.
    pub fn load_as_resource(&self, name: &str) -> Result<PathBuf, StorageError> {
        let path = resolve_and_validate_target(&self.root, name)
            .map_err(|_| StorageError::FileNotFound(name.to_string()))?;

        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {}
            _ => return Err(StorageError::FileNotFound(name.to_string())),
        }

        // Existence alone is not enough; the file must actually be openable
        // for reading, or serving it would fail after the 200 was promised.
        match fs::File::open(&path) {
            Ok(_) => Ok(path),
            Err(_) => Err(StorageError::FileNotFound(name.to_string())),
        }
    }

    /// Remove the entry stored under `name`. A missing entry is not an
    /// error.
    pub fn delete(&self, name: &str) -> Result<(), StorageError> {
        remove_recursively(&self.resolve(name))
    }

    /// Remove the root directory and everything beneath it. A missing root
    /// is not an error.
    pub fn delete_all(&self) -> Result<(), StorageError> {
        remove_recursively(&self.root)
    }
}

/// Recursive delete that treats an absent path as success
fn remove_recursively(path: &Path) -> Result<(), StorageError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(StorageError::IoError(e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            info!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            error!("Failed to remove {}: {}", path.display(), e);
            Err(StorageError::IoError(e))
        }
    }
}
