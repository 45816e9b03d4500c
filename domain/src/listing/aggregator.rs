//! List aggregation: sessions × favourites × search text → [`PresentationModel`].

use crate::listing::entities::{ListItem, PresentationModel, SessionRow};
use crate::listing::search::SearchQuery;
use crate::session::entities::Session;
use crate::session::favourites::FavouritesSet;
use std::collections::BTreeMap;

/// Build the sectioned list model.
///
/// 1. A non-blank query filters sessions by speaker/description.
/// 2. Non-empty favourites produce a title plus a row of the favourited
///    sessions taken from the *unfiltered* list, in list order.
/// 3. A non-empty filtered list produces the sessions title.
/// 4. Filtered sessions are grouped by `date`; groups are ordered by plain
///    string comparison of the date, sessions keep their relative order.
/// 5. Each row carries its favourite flag and, while searching, match spans.
///
/// Pure: the same inputs always yield an equal model.
pub fn aggregate(
    sessions: &[Session],
    favourites: &FavouritesSet,
    query: Option<&SearchQuery>,
) -> PresentationModel {
    let filtered: Vec<&Session> = match query {
        Some(query) => sessions.iter().filter(|s| query.matches(s)).collect(),
        None => sessions.iter().collect(),
    };

    let mut items = Vec::new();

    if !favourites.is_empty() {
        items.push(ListItem::FavouritesTitle);
        items.push(ListItem::Favourites {
            sessions: sessions
                .iter()
                .filter(|s| favourites.contains(&s.id))
                .cloned()
                .collect(),
        });
    }

    if !filtered.is_empty() {
        items.push(ListItem::SessionsTitle);
    }

    // BTreeMap keeps the date keys in lexical order; pushes are stable
    let mut by_date: BTreeMap<&str, Vec<&Session>> = BTreeMap::new();
    for session in filtered {
        by_date.entry(session.date.as_str()).or_default().push(session);
    }

    for (date, group) in by_date {
        items.push(ListItem::DateTitle {
            date: date.to_string(),
        });
        items.extend(group.into_iter().map(|session| {
            ListItem::SessionRow(SessionRow {
                is_favourite: favourites.contains(&session.id),
                highlights: query.map(|q| q.highlights(session)),
                session: session.clone(),
            })
        }));
    }

    PresentationModel { items }
}
