//! Output format value object

use serde::{Deserialize, Serialize};

/// How the session list is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sectioned list (default)
    #[default]
    Text,
    /// The presentation model as JSON
    Json,
}
