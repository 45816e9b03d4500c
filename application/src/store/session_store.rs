//! Session store: the single writer for sessions and favourites.

use crate::store::observable::Observable;
use agenda_domain::{DomainError, FavouritesSet, Session};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Holds the current session list and favourites set.
///
/// Writers are serialized through one lock that is never held across an
/// `.await`; readers go through the observables and never block writers.
/// Nothing here outlives the process.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Observable<Arc<Vec<Session>>>,
    favourites: Observable<FavouritesSet>,
    write_lock: Mutex<()>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Observable::new(Arc::new(Vec::new())),
            favourites: Observable::new(FavouritesSet::new()),
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest session list snapshot
    pub fn sessions(&self) -> Arc<Vec<Session>> {
        self.sessions.get()
    }

    pub fn subscribe_sessions(&self) -> watch::Receiver<Arc<Vec<Session>>> {
        self.sessions.subscribe()
    }

    /// Latest favourites snapshot
    pub fn favourites(&self) -> FavouritesSet {
        self.favourites.get()
    }

    pub fn subscribe_favourites(&self) -> watch::Receiver<FavouritesSet> {
        self.favourites.subscribe()
    }

    /// Replace the whole list with a freshly fetched one (no merging)
    pub fn replace_sessions(&self, sessions: Vec<Session>) {
        let _guard = self.lock();
        debug!("Replacing session list with {} sessions", sessions.len());
        self.sessions.publish(Arc::new(sessions));
    }

    /// Add or remove a favourite.
    ///
    /// Returns `false` without touching the set when adding while the set is
    /// already full. Removing always succeeds, member or not. Every accepted
    /// call republishes the set.
    pub fn set_favourite(&self, id: &str, want_favourite: bool) -> bool {
        let _guard = self.lock();
        let mut favourites = self.favourites.get();

        if want_favourite {
            if let Err(e) = favourites.try_add(id) {
                warn!("Rejected favourite {}: {}", id, e);
                return false;
            }
        } else {
            favourites.remove(id);
        }

        self.favourites.publish(favourites);
        true
    }

    /// Look up a session in the current list
    pub fn get_session(&self, id: &str) -> Result<Session, DomainError> {
        self.sessions
            .get()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| DomainError::SessionNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str) -> Session {
        Session::new(id, "Speaker", "2021-05-01", "10:00", "Talk")
    }

    fn store_with_favourites(ids: &[&str]) -> SessionStore {
        let store = SessionStore::new();
        for id in ids {
            assert!(store.set_favourite(id, true));
        }
        store
    }

    #[test]
    fn test_full_set_rejects_new_id() {
        let store = store_with_favourites(&["1", "2", "3"]);
        let before = store.favourites();

        assert!(!store.set_favourite("4", true));
        assert_eq!(store.favourites(), before);
    }

    #[test]
    fn test_add_below_limit_grows_by_one() {
        for existing in [&[][..], &["1"][..], &["1", "2"][..]] {
            let store = store_with_favourites(existing);
            assert!(store.set_favourite("9", true));
            assert_eq!(store.favourites().len(), existing.len() + 1);
        }
    }

    #[test]
    fn test_add_existing_keeps_size() {
        let store = store_with_favourites(&["1"]);
        assert!(store.set_favourite("1", true));
        assert_eq!(store.favourites().len(), 1);
    }

    #[test]
    fn test_remove_always_succeeds() {
        let store = store_with_favourites(&["1", "2", "3"]);
        assert!(store.set_favourite("2", false));
        assert!(store.set_favourite("missing", false));
        assert_eq!(store.favourites().len(), 2);
    }

    #[tokio::test]
    async fn test_favourites_are_republished() {
        let store = SessionStore::new();
        let mut receiver = store.subscribe_favourites();

        assert!(store.set_favourite("1", true));

        receiver.changed().await.unwrap();
        assert!(receiver.borrow_and_update().contains("1"));
    }

    #[test]
    fn test_rejected_add_does_not_notify() {
        let store = store_with_favourites(&["1", "2", "3"]);
        let receiver = store.subscribe_favourites();

        assert!(!store.set_favourite("4", true));
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn test_get_session() {
        let store = SessionStore::new();
        store.replace_sessions(vec![session("1"), session("2")]);

        assert_eq!(store.get_session("2").unwrap().id, "2");
        assert_eq!(
            store.get_session("3"),
            Err(DomainError::SessionNotFound("3".to_string()))
        );
    }

    #[test]
    fn test_replace_does_not_merge() {
        let store = SessionStore::new();
        store.replace_sessions(vec![session("1"), session("2")]);
        store.replace_sessions(vec![session("3")]);

        assert_eq!(store.sessions().len(), 1);
        assert!(store.get_session("1").unwrap_err().is_not_found());
    }
}
