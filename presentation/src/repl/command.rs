//! REPL command parsing

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Search(String),
    Clear,
    Favourite(String),
    Unfavourite(String),
    Info(String),
    /// Navigate to a route path such as `list` or `info/12`
    Open(String),
    Back,
    Refresh,
    Help,
    Quit,
    /// Missing argument or unrecognized command; carries the message to show
    Invalid(String),
    Empty,
}

impl ReplCommand {
    /// Parse one input line. A leading `/` is accepted on every command.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start();
        let line = line.strip_prefix('/').unwrap_or(line);
        if line.trim().is_empty() {
            return ReplCommand::Empty;
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (line.trim_end(), ""),
        };
        // Search text keeps inner and trailing spaces; everything else is trimmed
        let arg = rest.trim();

        match name {
            "list" | "ls" => ReplCommand::List,
            "search" | "s" => {
                if arg.is_empty() {
                    ReplCommand::Invalid("Usage: search <text>".to_string())
                } else {
                    ReplCommand::Search(rest.trim_start().to_string())
                }
            }
            "clear" => ReplCommand::Clear,
            "fav" => Self::with_id(arg, "fav", ReplCommand::Favourite),
            "unfav" => Self::with_id(arg, "unfav", ReplCommand::Unfavourite),
            "info" => Self::with_id(arg, "info", ReplCommand::Info),
            "open" => {
                if arg.is_empty() {
                    ReplCommand::Invalid("Usage: open <route>".to_string())
                } else {
                    ReplCommand::Open(arg.to_string())
                }
            }
            "back" => ReplCommand::Back,
            "refresh" | "r" => ReplCommand::Refresh,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => ReplCommand::Invalid(format!(
                "Unknown command: {other}\nType help for available commands"
            )),
        }
    }

    fn with_id(arg: &str, name: &str, make: fn(String) -> ReplCommand) -> ReplCommand {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            ReplCommand::Invalid(format!("Usage: {name} <session id>"))
        } else {
            make(arg.to_string())
        }
    }
}
