//! Session feed read from a local JSON file

use super::parse_sessions;
use agenda_application::{FetchError, SessionFetcher};
use agenda_domain::Session;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the feed from disk on every fetch, so edits show up on refresh.
pub struct FileSessionFetcher {
    path: PathBuf,
}

impl FileSessionFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionFetcher for FileSessionFetcher {
    async fn fetch_sessions(&self) -> Result<Vec<Session>, FetchError> {
        debug!("Reading session feed from {}", self.path.display());

        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {}", self.path.display(), e)))?;

        parse_sessions(&body)
    }
}
