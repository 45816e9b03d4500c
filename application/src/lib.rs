//! Application layer for agenda
//!
//! This crate contains the session store, use cases, port definitions and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    progress::{NoRefreshProgress, RefreshProgressNotifier},
    session_fetcher::{FetchError, SessionFetcher},
};
pub use store::{observable::Observable, session_store::SessionStore};
pub use use_cases::session_info::SessionInfoUseCase;
pub use use_cases::session_list::{RefreshOutcome, SessionListUseCase};
