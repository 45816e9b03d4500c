//! CLI entrypoint for agenda
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agenda_application::{
    RefreshOutcome, SessionFetcher, SessionInfoUseCase, SessionListUseCase, SessionStore,
};
use agenda_domain::{OutputFormat, Route, Severity};
use agenda_infrastructure::{ConfigLoader, FileConfig, FileSessionFetcher, HttpSessionFetcher};
use agenda_presentation::{
    AgendaRepl, Cli, ConsoleFormatter, JsonFormatter, OutputConfig, ReplConfig, ScreenFormatter,
    expand_home, favourites_limit_notice, refresh_notifier,
};
use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting agenda");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    apply_cli_overrides(&mut config, &cli);

    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue.message),
            Severity::Error => bail!("Invalid configuration: {}", issue.message),
        }
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    let behavior = config.behavior.to_behavior_config();

    // === Dependency Injection ===
    let fetcher: Arc<dyn SessionFetcher> = match &config.source.file {
        Some(path) => {
            info!("Reading sessions from {}", path.display());
            Arc::new(FileSessionFetcher::new(path.clone()))
        }
        None => {
            info!("Fetching sessions from {}", config.source.url);
            Arc::new(HttpSessionFetcher::new(config.source.url.clone()))
        }
    };
    let store = Arc::new(SessionStore::new());
    let list = Arc::new(SessionListUseCase::new(fetcher, store.clone(), behavior));
    let session_info = SessionInfoUseCase::new(store);

    let formatter: Box<dyn ScreenFormatter> = match output.format {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(output.color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    // Interactive mode
    if cli.interactive {
        if list.behavior().refresh_on_start {
            refresh(&list, cli.quiet).await;
        }
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.as_deref().map(expand_home),
            confirm_exit: config.repl.confirm_exit,
        };
        let mut repl = AgendaRepl::new(list, session_info, formatter, repl_config)
            .with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode always needs the list
    refresh(&list, cli.quiet).await;

    if list.current_state().is_error {
        bail!("Failed to load sessions");
    }

    for id in &cli.favourite {
        if !list.set_favourite(id, true) {
            eprintln!("{}", favourites_limit_notice());
        }
    }

    if let Some(text) = &cli.search {
        list.search(text);
    }

    let rendered = match &cli.info {
        Some(id) => match list.select_session(id)? {
            Route::Info { session_id } => {
                let session = session_info.get_session(&session_id)?;
                formatter.format_session(&session, session_info.is_favourite(&session_id))
            }
            Route::List => formatter.format_screen(&list.current_state()),
        },
        None => formatter.format_screen(&list.current_state()),
    };

    println!("{}", rendered);

    Ok(())
}

/// Initialize logging based on verbosity level, optionally into a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let Some(file_name) = path.file_name() else {
        bail!("Invalid log file path: {}", path.display());
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// `--file` and `--url` take precedence over the `[source]` section
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(path) = &cli.file {
        config.source.file = Some(path.clone());
    }
    if let Some(url) = &cli.url {
        config.source.url = url.clone();
        config.source.file = None;
    }
}

async fn refresh(list: &SessionListUseCase, quiet: bool) {
    let progress = refresh_notifier(quiet);
    match list.refresh_with_progress(progress.as_ref()).await {
        RefreshOutcome::Refreshed { count } => info!("Loaded {} sessions", count),
        RefreshOutcome::Failed(e) => warn!("Refresh failed: {}", e),
        RefreshOutcome::AlreadyInFlight => {}
    }
}
