//! Error handlers
//!
//! Converts storage errors into user-facing messages for the web boundary.
//! Raw I/O details stay in the logs; the browser only ever sees a short
//! sentence.

use crate::error::types::StorageError;
use log::error;

/// Log a storage error with its full cause chain
pub fn log_error(err: &StorageError) {
    error!("Storage error: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        error!("  caused by: {}", cause);
        source = std::error::Error::source(cause);
    }
}

/// Convert a storage error to a message safe to show the user
pub fn user_message(err: &StorageError) -> &'static str {
    match err {
        StorageError::EmptyUpload => "Please select a file",
        StorageError::InvalidFilename(_) => "File name can not be empty",
        StorageError::PathTraversal(_) => "File name is not allowed",
        StorageError::FileNotFound(_) => "File not found",
        StorageError::InvalidRoot(_) | StorageError::IoError(_) => "Could not store file",
    }
}
