//! Configuration file loading for agenda
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./agenda.toml` or `./.agenda.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/agenda/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_FEED_URL, FileBehaviorConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig, FileSourceConfig,
};
pub use loader::ConfigLoader;
