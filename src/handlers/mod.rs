//! HTTP boundary
//!
//! Maps requests onto the storage service and storage errors onto
//! user-facing responses. All failures are recovered here; nothing below
//! this layer ever surfaces as a raw error page.

pub mod files;
pub mod pages;

pub use files::config_routes;

use crate::config::ServerConfig;
use crate::storage::FileStorage;

/// Shared application state handed to every handler
pub struct AppState {
    pub storage: FileStorage,
    pub max_upload_size: usize,
}

impl AppState {
    pub fn new(storage: FileStorage, config: &ServerConfig) -> Self {
        Self {
            storage,
            max_upload_size: config.max_upload_size_bytes(),
        }
    }
}
