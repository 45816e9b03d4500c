//! Screen-level view state.

pub mod state;
