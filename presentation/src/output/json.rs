//! JSON output formatter

use crate::output::formatter::ScreenFormatter;
use agenda_domain::{ScreenState, Session};
use serde_json::json;

/// Emits the screen state and sessions as pretty-printed JSON
pub struct JsonFormatter;

impl ScreenFormatter for JsonFormatter {
    fn format_screen(&self, state: &ScreenState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }

    fn format_session(&self, session: &Session, is_favourite: bool) -> String {
        let value = json!({
            "session": session,
            "is_favourite": is_favourite,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_domain::{FavouritesSet, aggregate};

    #[test]
    fn test_screen_json_shape() {
        let sessions = vec![Session::new("1", "Alice", "2021-05-01", "10:00", "Talk")];
        let state = ScreenState {
            model: aggregate(&sessions, &FavouritesSet::new(), None),
            ..Default::default()
        };

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_screen(&state)).unwrap();

        assert_eq!(value["is_loading"], false);
        assert_eq!(value["is_error"], false);
        let items = value["model"].as_array().unwrap();
        assert_eq!(items[0]["kind"], "sessions_title");
        assert_eq!(items[1]["kind"], "date_title");
        assert_eq!(items[2]["kind"], "session_row");
        assert_eq!(items[2]["session"]["timeInterval"], "10:00");
        assert_eq!(items[2]["is_favourite"], false);
    }

    #[test]
    fn test_session_json() {
        let session = Session::new("7", "Bob", "2021-05-02", "12:00", "Rust");
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_session(&session, true)).unwrap();
        assert_eq!(value["session"]["id"], "7");
        assert_eq!(value["is_favourite"], true);
    }
}
