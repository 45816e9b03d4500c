//! Session feed adapters implementing [`SessionFetcher`](agenda_application::SessionFetcher).
//!
//! - [`http::HttpSessionFetcher`]: GET a JSON array from a fixed URL
//! - [`file::FileSessionFetcher`]: read the same JSON from disk

pub mod file;
pub mod http;

use agenda_application::FetchError;
use agenda_domain::Session;

/// Decode a feed body: a JSON array of session objects
pub fn parse_sessions(body: &[u8]) -> Result<Vec<Session>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}
