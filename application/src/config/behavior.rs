//! Refresh behavior configuration.

use std::time::Duration;

/// Controls how the session list use case talks to the fetcher.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for the feed. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// Fetch sessions as soon as the list screen opens.
    pub refresh_on_start: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: None,
            refresh_on_start: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            fetch_timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_refresh_on_start(mut self, enabled: bool) -> Self {
        self.refresh_on_start = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = BehaviorConfig::default();
        assert!(config.fetch_timeout.is_none());
        assert!(config.refresh_on_start);
    }

    #[test]
    fn test_from_timeout_seconds() {
        let config = BehaviorConfig::from_timeout_seconds(Some(5)).with_refresh_on_start(false);
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(5)));
        assert!(!config.refresh_on_start);
    }
}
