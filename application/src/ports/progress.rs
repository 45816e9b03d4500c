//! Refresh progress port
//!
//! Lets the presentation layer show a spinner or status line while the
//! feed is being fetched.

use crate::ports::session_fetcher::FetchError;

/// Callback for refresh progress
pub trait RefreshProgressNotifier: Send + Sync {
    /// Called right before the fetcher is invoked
    fn on_refresh_start(&self);

    /// Called after the new session list has been published
    fn on_refresh_complete(&self, session_count: usize);

    /// Called when the fetch failed; the previous list is kept
    fn on_refresh_failed(&self, error: &FetchError);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRefreshProgress;

impl RefreshProgressNotifier for NoRefreshProgress {
    fn on_refresh_start(&self) {}
    fn on_refresh_complete(&self, _session_count: usize) {}
    fn on_refresh_failed(&self, _error: &FetchError) {}
}
