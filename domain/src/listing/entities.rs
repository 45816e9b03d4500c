//! Presentation model entities

use crate::session::entities::Session;
use serde::Serialize;
use std::ops::Range;

/// `[start, end)` byte range of a search match within a session field.
///
/// Both ends lie on `char` boundaries of the original (not lowercased) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl From<Range<usize>> for HighlightSpan {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Match spans for the searchable fields of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlights {
    pub speaker: Vec<HighlightSpan>,
    pub description: Vec<HighlightSpan>,
}

/// One session in the date-grouped section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub session: Session,
    pub is_favourite: bool,
    /// Present only while a search filter is active
    pub highlights: Option<Highlights>,
}

/// A single entry of the sectioned list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListItem {
    FavouritesTitle,
    Favourites { sessions: Vec<Session> },
    SessionsTitle,
    DateTitle { date: String },
    SessionRow(SessionRow),
}

/// Ordered, display-ready list derived from sessions, favourites and search.
///
/// Always rebuilt from scratch; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresentationModel {
    pub items: Vec<ListItem>,
}

impl PresentationModel {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Rows of the date-grouped section, in display order
    pub fn session_rows(&self) -> impl Iterator<Item = &SessionRow> {
        self.items.iter().filter_map(|item| match item {
            ListItem::SessionRow(row) => Some(row),
            _ => None,
        })
    }

    /// Sessions shown in the favourites row (empty when there is none)
    pub fn favourites(&self) -> &[Session] {
        self.items
            .iter()
            .find_map(|item| match item {
                ListItem::Favourites { sessions } => Some(sessions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Date group headers, in display order
    pub fn dates(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ListItem::DateTitle { date } => Some(date.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_serializes_with_kind_tag() {
        let json = serde_json::to_value(ListItem::DateTitle {
            date: "2021-05-01".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "date_title");
        assert_eq!(json["date"], "2021-05-01");

        let json = serde_json::to_value(ListItem::SessionsTitle).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "sessions_title" }));
    }

    #[test]
    fn test_empty_model_helpers() {
        let model = PresentationModel::default();
        assert!(model.is_empty());
        assert!(model.favourites().is_empty());
        assert!(model.dates().is_empty());
        assert_eq!(model.session_rows().count(), 0);
    }
}
