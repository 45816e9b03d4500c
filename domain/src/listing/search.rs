//! Search filter value object

use crate::core::string::{contains_caseless, find_all_caseless, is_blank};
use crate::listing::entities::{HighlightSpan, Highlights};
use crate::session::entities::Session;

/// A validated search filter.
///
/// Blank input (empty or whitespace only) never produces a query, so the
/// aggregator falls back to the unfiltered list. Non-blank text is kept
/// verbatim, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn parse(text: &str) -> Option<Self> {
        if is_blank(text) {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Caseless substring match on speaker or description
    pub fn matches(&self, session: &Session) -> bool {
        contains_caseless(&session.description, &self.text)
            || contains_caseless(&session.speaker, &self.text)
    }

    /// Match spans for display, as byte ranges into the original fields
    pub fn highlights(&self, session: &Session) -> Highlights {
        Highlights {
            speaker: spans(&session.speaker, &self.text),
            description: spans(&session.description, &self.text),
        }
    }
}

fn spans(haystack: &str, needle: &str) -> Vec<HighlightSpan> {
    find_all_caseless(haystack, needle)
        .into_iter()
        .map(HighlightSpan::from)
        .collect()
}
