//! Interactive agenda browser

use crate::config::ReplConfig;
use crate::output::console::favourites_limit_notice;
use crate::output::formatter::ScreenFormatter;
use crate::progress::reporter::refresh_notifier;
use crate::repl::command::ReplCommand;
use agenda_application::{RefreshOutcome, SessionInfoUseCase, SessionListUseCase};
use agenda_domain::Route;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

const HELP: &str = "\
Commands:
  list, ls          - Show the session list
  search <text>     - Filter by speaker or description
  clear             - Clear the search
  fav <id>          - Add a session to favourites
  unfav <id>        - Remove a session from favourites
  info <id>         - Show session details
  open <route>      - Go to a route (list, info/<id>)
  back              - Return to the list
  refresh, r        - Fetch the sessions again
  help, h, ?        - Show this help
  quit, exit, q     - Exit";

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplStep {
    /// Print the text (if any) and read the next line
    Continue(String),
    Exit,
}

/// Interactive REPL over the list and info use cases
pub struct AgendaRepl {
    list: Arc<SessionListUseCase>,
    info: SessionInfoUseCase,
    formatter: Box<dyn ScreenFormatter>,
    config: ReplConfig,
    show_progress: bool,
    route: Route,
}

impl AgendaRepl {
    pub fn new(
        list: Arc<SessionListUseCase>,
        info: SessionInfoUseCase,
        formatter: Box<dyn ScreenFormatter>,
        config: ReplConfig,
    ) -> Self {
        Self {
            list,
            info,
            formatter,
            config,
            show_progress: true,
            route: Route::List,
        }
    }

    /// Set whether to show the refresh spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Current screen
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("agenda".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        println!("{}", self.render_current());

        loop {
            match editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => match self.handle(ReplCommand::parse(&line)).await {
                    ReplStep::Continue(output) => {
                        if !output.is_empty() {
                            println!("{output}");
                        }
                    }
                    ReplStep::Exit => {
                        if !self.config.confirm_exit || Self::confirm_exit(&mut editor)? {
                            println!("Bye!");
                            break;
                        }
                    }
                },
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(_) => {
                    println!("Bye!");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Conference Agenda              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{HELP}");
        println!();
    }

    fn confirm_exit(editor: &mut Reedline) -> std::io::Result<bool> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("Are you sure you want to exit? [y/N]".to_string()),
            DefaultPromptSegment::Empty,
        );
        match editor.read_line(&prompt)? {
            Signal::Success(answer) => Ok(is_confirmation(&answer)),
            _ => Ok(false),
        }
    }

    /// Execute one command against the use cases and return what to print.
    pub async fn handle(&mut self, command: ReplCommand) -> ReplStep {
        debug!("REPL command: {:?}", command);
        let output = match command {
            ReplCommand::Empty => String::new(),
            ReplCommand::Help => HELP.to_string(),
            ReplCommand::Quit => return ReplStep::Exit,
            ReplCommand::Invalid(message) => message,
            ReplCommand::List | ReplCommand::Back => self.navigate(Route::List),
            ReplCommand::Search(text) => {
                self.list.search(&text);
                self.navigate(Route::List)
            }
            ReplCommand::Clear => {
                self.list.clear_search();
                self.navigate(Route::List)
            }
            ReplCommand::Favourite(id) => self.set_favourite(&id, true),
            ReplCommand::Unfavourite(id) => self.set_favourite(&id, false),
            ReplCommand::Info(id) => self.open_info(&id),
            ReplCommand::Open(path) => match path.parse::<Route>() {
                Ok(Route::Info { session_id }) => self.open_info(&session_id),
                Ok(route) => self.navigate(route),
                Err(e) => e.to_string(),
            },
            ReplCommand::Refresh => self.refresh().await,
        };
        ReplStep::Continue(output)
    }

    async fn refresh(&mut self) -> String {
        let progress = refresh_notifier(!self.show_progress);
        let outcome = self.list.refresh_with_progress(progress.as_ref()).await;
        match outcome {
            RefreshOutcome::AlreadyInFlight => "Refresh already in progress".to_string(),
            RefreshOutcome::Refreshed { .. } | RefreshOutcome::Failed(_) => self.render_current(),
        }
    }

    /// Navigation to a detail page is aborted when the id is not in the list
    fn open_info(&mut self, id: &str) -> String {
        match self.list.select_session(id) {
            Ok(route) => self.navigate(route),
            Err(e) => e.to_string(),
        }
    }

    fn set_favourite(&mut self, id: &str, want_favourite: bool) -> String {
        // Removal must work for ids a refresh has dropped from the list
        if want_favourite && let Err(e) = self.info.get_session(id) {
            return e.to_string();
        }
        if !self.list.set_favourite(id, want_favourite) {
            return favourites_limit_notice();
        }
        self.render_current()
    }

    fn navigate(&mut self, route: Route) -> String {
        self.route = route;
        self.render_current()
    }

    fn render_current(&mut self) -> String {
        if let Route::Info { session_id } = &self.route {
            match self.info.get_session(session_id) {
                Ok(session) => {
                    let is_favourite = self.info.is_favourite(&session.id);
                    return self.formatter.format_session(&session, is_favourite);
                }
                Err(e) => {
                    // The session disappeared with a refresh; fall back to the list
                    warn!("{}", e);
                    self.route = Route::List;
                }
            }
        }
        self.formatter.format_screen(&self.list.current_state())
    }
}

/// Whether an answer to a yes/no prompt means yes
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
