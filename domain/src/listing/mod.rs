//! Session list aggregation.
//!
//! - [`search::SearchQuery`]: a non-blank, caseless search filter
//! - [`entities::PresentationModel`]: the sectioned list the UI renders
//! - [`aggregator::aggregate`]: sessions × favourites × search → model

pub mod aggregator;
pub mod entities;
pub mod search;
