pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;

pub use storage::FileStorage;
