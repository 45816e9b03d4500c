//! Presentation layer for agenda
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig, expand_home};
pub use output::console::{ConsoleFormatter, favourites_limit_notice};
pub use output::formatter::ScreenFormatter;
pub use output::json::JsonFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, refresh_notifier};
pub use repl::{AgendaRepl, ReplCommand, ReplStep};
