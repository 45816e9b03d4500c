//! Output formatter trait

use agenda_domain::{ScreenState, Session};

/// Turns screen state and session details into printable text
pub trait ScreenFormatter: Send + Sync {
    /// Format the list screen
    fn format_screen(&self, state: &ScreenState) -> String;

    /// Format the detail view of one session
    fn format_session(&self, session: &Session, is_favourite: bool) -> String;
}
