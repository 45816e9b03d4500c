//! Output formatting for the session list and session detail.

pub mod console;
pub mod formatter;
pub mod json;
