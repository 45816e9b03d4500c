//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: caseless matching and truncation helpers

pub mod error;
pub mod string;
