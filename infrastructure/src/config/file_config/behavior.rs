//! Refresh behavior configuration from TOML (`[behavior]` section)

use agenda_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Fetch timeout in seconds; unset waits indefinitely
    pub fetch_timeout_seconds: Option<u64>,
    /// Fetch sessions on startup
    pub refresh_on_start: bool,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_seconds: None,
            refresh_on_start: true,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.fetch_timeout_seconds)
            .with_refresh_on_start(self.refresh_on_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_behavior_config() {
        let file = FileBehaviorConfig {
            fetch_timeout_seconds: Some(10),
            refresh_on_start: false,
        };
        let behavior = file.to_behavior_config();
        assert_eq!(behavior.fetch_timeout, Some(Duration::from_secs(10)));
        assert!(!behavior.refresh_on_start);
    }
}
