//! Session list use case.
//!
//! Owns the list screen's state: it forwards intents (refresh, search,
//! favourite toggle, selection) to the [`SessionStore`] and republishes a
//! [`ScreenState`] whose model is rebuilt by [`aggregate`] after every change.
//!
//! Overlapping refreshes are coalesced: a refresh requested while another is
//! in flight returns [`RefreshOutcome::AlreadyInFlight`] without fetching and
//! the in-flight result is what every subscriber ends up seeing.

use crate::config::BehaviorConfig;
use crate::ports::progress::{NoRefreshProgress, RefreshProgressNotifier};
use crate::ports::session_fetcher::{FetchError, SessionFetcher};
use crate::store::observable::Observable;
use crate::store::session_store::SessionStore;
use agenda_domain::{
    DomainError, FavouritesSet, Route, ScreenState, SearchQuery, Session, aggregate,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Result of a [`SessionListUseCase::refresh`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with `count` fetched sessions
    Refreshed { count: usize },
    /// The fetch failed; the previous list and model are kept
    Failed(FetchError),
    /// Another refresh was already running
    AlreadyInFlight,
}

/// Clears the in-flight flag even if the refresh future is dropped mid-fetch
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Use case behind the session list screen.
pub struct SessionListUseCase {
    fetcher: Arc<dyn SessionFetcher>,
    store: Arc<SessionStore>,
    behavior: BehaviorConfig,
    search_text: Observable<String>,
    screen: Observable<ScreenState>,
    refreshing: AtomicBool,
    recompute_lock: Mutex<()>,
}

impl SessionListUseCase {
    pub fn new(
        fetcher: Arc<dyn SessionFetcher>,
        store: Arc<SessionStore>,
        behavior: BehaviorConfig,
    ) -> Self {
        let use_case = Self {
            fetcher,
            store,
            behavior,
            search_text: Observable::default(),
            screen: Observable::default(),
            refreshing: AtomicBool::new(false),
            recompute_lock: Mutex::new(()),
        };
        // The store may be shared and already hold favourites
        use_case.recompute(|_| {});
        use_case
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    // ==================== Observation ====================

    pub fn screen_state(&self) -> watch::Receiver<ScreenState> {
        self.screen.subscribe()
    }

    pub fn current_state(&self) -> ScreenState {
        self.screen.get()
    }

    pub fn favourites(&self) -> watch::Receiver<FavouritesSet> {
        self.store.subscribe_favourites()
    }

    pub fn search_text(&self) -> String {
        self.search_text.get()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    // ==================== Intents ====================

    pub async fn refresh(&self) -> RefreshOutcome {
        self.refresh_with_progress(&NoRefreshProgress).await
    }

    /// Fetch the feed and replace the session list.
    ///
    /// While the fetch runs, readers keep seeing the previous list. On
    /// failure only the error flag changes.
    pub async fn refresh_with_progress(
        &self,
        progress: &dyn RefreshProgressNotifier,
    ) -> RefreshOutcome {
        if self.refreshing.swap(true, Ordering::AcqRel) {
            debug!("Refresh already in flight, coalescing");
            return RefreshOutcome::AlreadyInFlight;
        }
        let _in_flight = InFlight(&self.refreshing);

        info!("Refreshing sessions");
        self.screen.update(ScreenState::start_loading);
        progress.on_refresh_start();

        match self.fetch().await {
            Ok(sessions) => {
                let count = sessions.len();
                self.store.replace_sessions(sessions);
                self.recompute(ScreenState::finish_loading);
                info!("Loaded {} sessions", count);
                progress.on_refresh_complete(count);
                RefreshOutcome::Refreshed { count }
            }
            Err(e) => {
                warn!("Failed to fetch sessions: {}", e);
                self.screen.update(ScreenState::fail);
                progress.on_refresh_failed(&e);
                RefreshOutcome::Failed(e)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Session>, FetchError> {
        match self.behavior.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetcher.fetch_sessions())
                .await
                .map_err(|_| FetchError::Timeout)?,
            None => self.fetcher.fetch_sessions().await,
        }
    }

    /// Set the search text. Blank text shows the unfiltered list.
    pub fn search(&self, text: &str) {
        debug!("Search text changed: {:?}", text);
        self.search_text.publish(text.to_string());
        self.recompute(|_| {});
    }

    pub fn clear_search(&self) {
        self.search("");
    }

    /// Star or unstar a session.
    ///
    /// Returns `false` when the favourites limit is reached; the caller is
    /// expected to show a transient notice.
    pub fn set_favourite(&self, id: &str, want_favourite: bool) -> bool {
        let accepted = self.store.set_favourite(id, want_favourite);
        if accepted {
            self.recompute(|_| {});
        }
        accepted
    }

    /// Resolve the detail route for a tapped session.
    ///
    /// Fails with [`DomainError::SessionNotFound`] when the id is no longer
    /// in the current list, so navigation can be aborted.
    pub fn select_session(&self, id: &str) -> Result<Route, DomainError> {
        self.store.get_session(id).map(|session| Route::info(session.id))
    }

    /// Rebuild the model from the latest snapshots and publish it together
    /// with `finish` applied, as one update.
    fn recompute(&self, finish: impl FnOnce(&mut ScreenState)) {
        let _guard = self
            .recompute_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let sessions = self.store.sessions();
        let favourites = self.store.favourites();
        let query = SearchQuery::parse(&self.search_text.get());
        let model = aggregate(&sessions, &favourites, query.as_ref());
        debug!(
            "Recomputed list model: {} items from {} sessions",
            model.len(),
            sessions.len()
        );

        self.screen.update(|state| {
            state.model = model;
            finish(state);
        });
    }
}
