//! In-memory state holders.
//!
//! - [`observable::Observable`]: latest-value publish/subscribe cell
//! - [`session_store::SessionStore`]: canonical sessions and favourites

pub mod observable;
pub mod session_store;
