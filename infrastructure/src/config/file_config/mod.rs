//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod output;
mod repl;
mod source;

pub use behavior::FileBehaviorConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use source::{DEFAULT_FEED_URL, FileSourceConfig};

use agenda_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the session feed comes from
    pub source: FileSourceConfig,
    /// Refresh behavior
    pub behavior: FileBehaviorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. An HTTP source needs a non-empty URL
    /// 2. The URL should be http(s)
    /// 3. A zero fetch timeout fails every refresh
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.source.file.is_none() {
            let url = self.source.url.trim();
            if url.is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: "source.url".to_string(),
                    },
                    "source.url is empty and no source.file is configured",
                ));
            } else if !(url.starts_with("http://") || url.starts_with("https://")) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnsupportedScheme {
                        url: url.to_string(),
                    },
                    format!("source.url '{}' is not an http(s) URL", url),
                ));
            }
        }

        if self.behavior.fetch_timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroTimeout {
                    field: "behavior.fetch_timeout_seconds".to_string(),
                },
                "behavior.fetch_timeout_seconds is 0; every refresh will time out",
            ));
        }

        issues
    }
}
