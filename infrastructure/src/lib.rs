//! Infrastructure layer for agenda
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod feed;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_FEED_URL, FileBehaviorConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileSourceConfig,
};
pub use feed::{file::FileSessionFetcher, http::HttpSessionFetcher, parse_sessions};
