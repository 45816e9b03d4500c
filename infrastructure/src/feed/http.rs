//! HTTP session feed

use super::parse_sessions;
use agenda_application::{FetchError, SessionFetcher};
use agenda_domain::Session;
use async_trait::async_trait;
use tracing::debug;

const USER_AGENT: &str = concat!("agenda/", env!("CARGO_PKG_VERSION"));

/// Fetches the session feed with a single GET.
///
/// No auth headers, no pagination, no retries.
pub struct HttpSessionFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpSessionFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SessionFetcher for HttpSessionFetcher {
    async fn fetch_sessions(&self) -> Result<Vec<Session>, FetchError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        debug!("Received {} bytes from session feed", body.len());

        parse_sessions(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_kept() {
        let fetcher = HttpSessionFetcher::new("https://example.com/sessions.json");
        assert_eq!(fetcher.url(), "https://example.com/sessions.json");
    }

    #[tokio::test]
    async fn test_with_client_uses_given_client() {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let fetcher = HttpSessionFetcher::with_client(client, "http://127.0.0.1:1/feed.json");

        assert_eq!(fetcher.url(), "http://127.0.0.1:1/feed.json");
        let err = fetcher.fetch_sessions().await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Port 1 on loopback refuses connections
        let fetcher = HttpSessionFetcher::new("http://127.0.0.1:1/sessions.json");
        let err = fetcher.fetch_sessions().await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
    }
}
