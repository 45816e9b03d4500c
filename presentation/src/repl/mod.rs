//! Interactive REPL mode

pub mod agenda_repl;
pub mod command;

pub use agenda_repl::{AgendaRepl, ReplStep};
pub use command::ReplCommand;
