//! Domain layer for agenda
//!
//! This crate contains the core entities and the pure list aggregation logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: one talk in the conference feed
//! - **Favourites**: up to [`MAX_FAVOURITES`] starred session ids
//! - **Presentation model**: the sectioned list derived from sessions,
//!   favourites and the current search text by [`aggregate`]

pub mod config;
pub mod core;
pub mod listing;
pub mod navigation;
pub mod screen;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use listing::{
    aggregator::aggregate,
    entities::{HighlightSpan, Highlights, ListItem, PresentationModel, SessionRow},
    search::SearchQuery,
};
pub use navigation::route::Route;
pub use screen::state::ScreenState;
pub use session::{
    entities::Session,
    favourites::{FavouritesSet, MAX_FAVOURITES},
};
