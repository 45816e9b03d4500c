//! Refresh progress reporting

pub mod reporter;
