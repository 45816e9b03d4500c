//! Progress reporting for feed refreshes

use agenda_application::{FetchError, NoRefreshProgress, RefreshProgressNotifier};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner shown while the feed is being fetched
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshProgressNotifier for ProgressReporter {
    fn on_refresh_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Fetching sessions...");
        pb.enable_steady_tick(Duration::from_millis(80));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_refresh_complete(&self, session_count: usize) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        eprintln!("{} Loaded {} sessions", "v".green(), session_count);
    }

    fn on_refresh_failed(&self, error: &FetchError) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        eprintln!("{} {}", "x".red(), error);
    }
}

/// Plain line-per-event progress for when stderr is not a terminal
pub struct SimpleProgress<W = io::Stderr> {
    out: Mutex<W>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> SimpleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, text: fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{text}");
    }
}

impl<W: Write + Send> RefreshProgressNotifier for SimpleProgress<W> {
    fn on_refresh_start(&self) {
        self.line(format_args!("-> Fetching sessions..."));
    }

    fn on_refresh_complete(&self, session_count: usize) {
        self.line(format_args!("  v {session_count} sessions"));
    }

    fn on_refresh_failed(&self, error: &FetchError) {
        self.line(format_args!("  x {error}"));
    }
}

/// Pick the refresh notifier: nothing when quiet, a spinner on a terminal,
/// plain lines otherwise
pub fn refresh_notifier(quiet: bool) -> Box<dyn RefreshProgressNotifier> {
    if quiet {
        Box::new(NoRefreshProgress)
    } else if io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::new())
    }
}
