//! Screen routes.

pub mod route;
