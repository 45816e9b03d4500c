//! Favourites value object

use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Maximum number of sessions a user can star at once.
pub const MAX_FAVOURITES: usize = 3;

/// Set of favourite session ids, bounded by [`MAX_FAVOURITES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavouritesSet {
    ids: BTreeSet<String>,
}

impl FavouritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the set.
    ///
    /// Fails when the set is already full, even if `id` is a member.
    /// Returns whether the id was newly inserted.
    pub fn try_add(&mut self, id: impl Into<String>) -> Result<bool, DomainError> {
        if self.is_full() {
            return Err(DomainError::FavouritesLimitReached {
                limit: MAX_FAVOURITES,
            });
        }
        Ok(self.ids.insert(id.into()))
    }

    /// Remove `id`. Returns whether it was a member.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_FAVOURITES
    }

    /// Ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> FavouritesSet {
        let mut set = FavouritesSet::new();
        for id in ["1", "2", "3"] {
            set.try_add(id).unwrap();
        }
        set
    }

    #[test]
    fn test_add_grows_by_one() {
        let mut set = FavouritesSet::new();
        assert_eq!(set.try_add("1"), Ok(true));
        assert_eq!(set.len(), 1);
        assert!(set.contains("1"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = FavouritesSet::new();
        set.try_add("1").unwrap();
        assert_eq!(set.try_add("1"), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_fourth_add_is_rejected() {
        let mut set = full_set();
        let before = set.clone();
        assert_eq!(
            set.try_add("4"),
            Err(DomainError::FavouritesLimitReached { limit: 3 })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn test_full_set_rejects_existing_member_too() {
        let mut set = full_set();
        assert!(set.try_add("1").is_err());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut set = full_set();
        assert!(set.remove("2"));
        assert!(!set.remove("2"));
        assert!(!set.remove("missing"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["1", "3"]);
        assert!(!set.is_full());
    }

    #[test]
    fn test_serializes_as_list() {
        let set = full_set();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["1","2","3"]"#);
    }
}
