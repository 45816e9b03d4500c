//! Session fetcher port
//!
//! Defines how the application layer obtains the session feed.

use agenda_domain::Session;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching the session feed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Invalid session feed: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Source of the session feed
///
/// Called with no parameters; returns the sessions in feed order.
/// Implementations (HTTP, file) live in the infrastructure layer.
#[async_trait]
pub trait SessionFetcher: Send + Sync {
    async fn fetch_sessions(&self) -> Result<Vec<Session>, FetchError>;
}
