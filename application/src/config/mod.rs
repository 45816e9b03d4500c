//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: refresh behavior (fetch timeout, refresh on start)

pub mod behavior;

pub use behavior::BehaviorConfig;
