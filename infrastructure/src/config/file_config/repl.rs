//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
    /// Ask before leaving the interactive session
    pub confirm_exit: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            confirm_exit: true,
        }
    }
}
