//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Favourites limit reached ({limit} sessions)")]
    FavouritesLimitReached { limit: usize },

    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

impl DomainError {
    /// Check if this error means the requested session no longer exists
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::SessionNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DomainError::SessionNotFound("42".to_string());
        assert_eq!(error.to_string(), "Session not found: 42");
    }

    #[test]
    fn test_limit_display() {
        let error = DomainError::FavouritesLimitReached { limit: 3 };
        assert_eq!(error.to_string(), "Favourites limit reached (3 sessions)");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::SessionNotFound("1".to_string()).is_not_found());
        assert!(!DomainError::FavouritesLimitReached { limit: 3 }.is_not_found());
        assert!(!DomainError::InvalidRoute("x".to_string()).is_not_found());
    }
}
