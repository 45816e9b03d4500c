//! Session domain.
//!
//! - [`entities::Session`]: one talk in the agenda feed
//! - [`favourites::FavouritesSet`]: the capacity-bounded set of starred session ids

pub mod entities;
pub mod favourites;
