//! Session detail use case.

use crate::store::session_store::SessionStore;
use agenda_domain::{DomainError, Session};
use std::sync::Arc;

/// Read-only access for the detail view.
///
/// A lookup can fail after a refresh replaced the list; callers abort
/// navigation to the detail view on [`DomainError::SessionNotFound`].
#[derive(Clone)]
pub struct SessionInfoUseCase {
    store: Arc<SessionStore>,
}

impl SessionInfoUseCase {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn get_session(&self, id: &str) -> Result<Session, DomainError> {
        self.store.get_session(id)
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.store.favourites().contains(id)
    }
}
