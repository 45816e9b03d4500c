//! Feed source configuration from TOML (`[source]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The public session feed
pub const DEFAULT_FEED_URL: &str = "https://gist.githubusercontent.com/AJIEKCX/901e7ae9593e4afd136abe10ca7d510f/raw/61e7c1f037345370cf28b5ae6fdaffdd9e7e18d5/Sessions.json";

/// Raw feed source configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// URL of the JSON session feed
    pub url: String,
    /// Read the feed from a local JSON file instead of HTTP
    pub file: Option<PathBuf>,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            file: None,
        }
    }
}
