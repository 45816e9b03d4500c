//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod session_info;
pub mod session_list;
