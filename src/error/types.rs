//! Error types
//!
//! Defines the storage error taxonomy for the upload server.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    /// The storage root location is empty or blank
    InvalidRoot(String),
    /// The uploaded byte source was empty
    EmptyUpload,
    /// The uploaded file name was empty or blank
    InvalidFilename(String),
    /// The resolved target escapes the storage root
    PathTraversal(String),
    /// The requested file does not exist or is not readable
    FileNotFound(String),
    /// Any underlying I/O failure, with the source error chained
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidRoot(p) => write!(f, "Invalid storage root: {}", p),
            StorageError::EmptyUpload => write!(f, "File upload can not be empty"),
            StorageError::InvalidFilename(n) => write!(f, "Invalid file name: {:?}", n),
            StorageError::PathTraversal(n) => write!(f, "Path traversal attempt: {}", n),
            StorageError::FileNotFound(n) => write!(f, "Could not read file: {}", n),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}
