//! Route value object
//!
//! Paths follow the `list` / `info/{sessionId}` scheme.

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Destination screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Info { session_id: String },
}

impl Route {
    pub const LIST_PATTERN: &'static str = "list";
    pub const INFO_PATTERN: &'static str = "info/{sessionId}";

    pub fn info(session_id: impl Into<String>) -> Self {
        Self::Info {
            session_id: session_id.into(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => Self::LIST_PATTERN.to_string(),
            Route::Info { session_id } => format!("info/{session_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::LIST_PATTERN {
            return Ok(Route::List);
        }
        match s.strip_prefix("info/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Route::info(id)),
            _ => Err(DomainError::InvalidRoute(s.to_string())),
        }
    }
}
