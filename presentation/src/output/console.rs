//! Console output formatter for the session list

use crate::output::formatter::ScreenFormatter;
use agenda_domain::core::string::truncate_chars;
use agenda_domain::{HighlightSpan, ListItem, MAX_FAVOURITES, ScreenState, Session, SessionRow};
use colored::Colorize;

const CARD_DESCRIPTION_CHARS: usize = 60;
const ROW_DESCRIPTION_CHARS: usize = 100;

/// Notice shown when a fourth favourite is rejected
pub fn favourites_limit_notice() -> String {
    format!("Could not add session to favourites: limit of {MAX_FAVOURITES} reached")
}

/// Formats screen state for terminal display
pub struct ConsoleFormatter {
    color: bool,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            format!("{}\n", text.cyan().bold())
        } else {
            format!("{text}\n")
        }
    }

    fn date_header(&self, date: &str) -> String {
        let header = format!("── {date} ──");
        if self.color {
            format!("\n{}\n", header.yellow().bold())
        } else {
            format!("\n{header}\n")
        }
    }

    fn star(&self, is_favourite: bool) -> String {
        match (is_favourite, self.color) {
            (true, true) => "★".yellow().to_string(),
            (true, false) => "★".to_string(),
            (false, _) => "☆".to_string(),
        }
    }

    /// Wrap each span in emphasis; without color, matches are marked `*like this*`
    pub fn highlight(&self, text: &str, spans: &[HighlightSpan]) -> String {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for span in spans {
            if span.start < cursor || span.end > text.len() {
                continue;
            }
            out.push_str(&text[cursor..span.start]);
            let matched = &text[span.start..span.end];
            if self.color {
                out.push_str(&matched.black().on_yellow().to_string());
            } else {
                out.push('*');
                out.push_str(matched);
                out.push('*');
            }
            cursor = span.end;
        }
        out.push_str(&text[cursor..]);
        out
    }

    fn favourite_card(&self, session: &Session) -> String {
        let mut card = String::new();
        card.push_str(&format!("  ┌ {} · {}\n", session.time_interval, session.date));
        let speaker = if self.color {
            session.speaker.bold().to_string()
        } else {
            session.speaker.clone()
        };
        card.push_str(&format!("  │ {speaker}\n"));
        card.push_str(&format!(
            "  └ {}\n",
            truncate_chars(&session.description, CARD_DESCRIPTION_CHARS)
        ));
        card
    }

    fn session_row(&self, row: &SessionRow) -> String {
        let session = &row.session;
        let (speaker, description) = match &row.highlights {
            Some(h) => (
                self.highlight(&session.speaker, &h.speaker),
                self.highlight(&session.description, &h.description),
            ),
            // Highlight offsets refer to the full text, so only plain rows are truncated
            None => (
                session.speaker.clone(),
                truncate_chars(&session.description, ROW_DESCRIPTION_CHARS),
            ),
        };
        let id = format!("[{}]", session.id);
        let id = if self.color {
            id.dimmed().to_string()
        } else {
            id
        };
        format!(
            "  {} {} {}  {}\n      {}\n",
            self.star(row.is_favourite),
            id,
            speaker,
            session.time_interval,
            description
        )
    }
}

impl ScreenFormatter for ConsoleFormatter {
    fn format_screen(&self, state: &ScreenState) -> String {
        let mut output = String::new();

        if state.is_loading {
            let line = "Loading sessions…";
            if self.color {
                output.push_str(&format!("{}\n", line.dimmed()));
            } else {
                output.push_str(&format!("{line}\n"));
            }
        }

        if state.is_error {
            let line = "Failed to load sessions";
            if self.color {
                output.push_str(&format!("{}\n", line.red().bold()));
            } else {
                output.push_str(&format!("{line}\n"));
            }
        }

        if state.model.is_empty() && !state.is_loading && !state.is_error {
            output.push_str("No sessions to show\n");
            return output;
        }

        for item in &state.model.items {
            match item {
                ListItem::FavouritesTitle => output.push_str(&self.title("Favourites")),
                ListItem::Favourites { sessions } => {
                    for session in sessions {
                        output.push_str(&self.favourite_card(session));
                    }
                    output.push('\n');
                }
                ListItem::SessionsTitle => output.push_str(&self.title("Sessions")),
                ListItem::DateTitle { date } => output.push_str(&self.date_header(date)),
                ListItem::SessionRow(row) => output.push_str(&self.session_row(row)),
            }
        }

        output
    }

    fn format_session(&self, session: &Session, is_favourite: bool) -> String {
        let mut output = String::new();
        let speaker = if self.color {
            session.speaker.cyan().bold().to_string()
        } else {
            session.speaker.clone()
        };
        output.push_str(&format!("{} {}\n\n", speaker, self.star(is_favourite)));
        output.push_str(&format!("{}\n\n", session.schedule()));
        output.push_str(&format!("{}\n", session.description));
        if !session.image_url.is_empty() {
            output.push_str(&format!("\nImage: {}\n", session.image_url));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_domain::{FavouritesSet, SearchQuery, aggregate};

    fn plain() -> ConsoleFormatter {
        ConsoleFormatter::new(false)
    }

    fn sessions() -> Vec<Session> {
        vec![
            Session::new("1", "Alice", "2021-05-01", "10:00-11:00", "Compose internals"),
            Session::new("2", "Anna K.", "2021-05-02", "12:00-13:00", "Coroutines"),
        ]
    }

    #[test]
    fn test_highlight_plain_markers() {
        let spans = vec![HighlightSpan { start: 0, end: 4 }];
        assert_eq!(plain().highlight("Anna K.", &spans), "*Anna* K.");
    }

    #[test]
    fn test_highlight_multiple_spans() {
        let spans = vec![
            HighlightSpan { start: 2, end: 4 },
            HighlightSpan { start: 4, end: 6 },
        ];
        assert_eq!(plain().highlight("banana", &spans), "ba*na**na*");
    }

    #[test]
    fn test_highlight_ignores_out_of_range_span() {
        let spans = vec![HighlightSpan { start: 3, end: 40 }];
        assert_eq!(plain().highlight("abc", &spans), "abc");
    }

    #[test]
    fn test_format_screen_sections() {
        let mut favourites = FavouritesSet::new();
        favourites.try_add("2").unwrap();
        let state = ScreenState {
            model: aggregate(&sessions(), &favourites, None),
            ..Default::default()
        };

        let output = plain().format_screen(&state);

        let fav = output.find("Favourites").unwrap();
        let list = output.find("Sessions").unwrap();
        let first_date = output.find("── 2021-05-01 ──").unwrap();
        let second_date = output.find("── 2021-05-02 ──").unwrap();
        assert!(fav < list && list < first_date && first_date < second_date);
        assert!(output.contains("☆ [1] Alice  10:00-11:00"));
        assert!(output.contains("★ [2] Anna K.  12:00-13:00"));
        assert!(output.contains("  ┌ 12:00-13:00 · 2021-05-02"));
    }

    #[test]
    fn test_format_screen_with_search_highlights() {
        let query = SearchQuery::parse("anna");
        let state = ScreenState {
            model: aggregate(&sessions(), &FavouritesSet::new(), query.as_ref()),
            ..Default::default()
        };

        let output = plain().format_screen(&state);

        assert!(output.contains("*Anna* K."));
        assert!(!output.contains("Alice"));
    }

    #[test]
    fn test_error_banner_keeps_previous_list() {
        let state = ScreenState {
            is_error: true,
            model: aggregate(&sessions(), &FavouritesSet::new(), None),
            ..Default::default()
        };

        let output = plain().format_screen(&state);

        assert!(output.starts_with("Failed to load sessions"));
        assert!(output.contains("Alice"));
    }

    #[test]
    fn test_empty_screen() {
        let output = plain().format_screen(&ScreenState::default());
        assert_eq!(output, "No sessions to show\n");
    }

    #[test]
    fn test_format_session_detail() {
        let session = Session::new("1", "Alice", "2021-05-01", "10:00-11:00", "Compose internals")
            .with_image_url("https://example.com/alice.png");

        let output = plain().format_session(&session, true);

        assert!(output.starts_with("Alice ★"));
        assert!(output.contains("2021-05-01, 10:00-11:00"));
        assert!(output.contains("Image: https://example.com/alice.png"));
    }

    #[test]
    fn test_limit_notice() {
        assert_eq!(
            favourites_limit_notice(),
            "Could not add session to favourites: limit of 3 reached"
        );
    }
}
