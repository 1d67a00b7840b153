//! File system storage management
//!
//! Handles file operations and path validation beneath the storage root.

pub mod service;
pub mod validation;

pub use service::FileStorage;
pub use validation::{normalize_lexically, resolve_and_validate_target};
