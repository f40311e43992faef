//! Admission TUI - terminal front-end for college admission applications
//!
//! A Ratatui-based TUI with four tabs: a welcome screen, the admission
//! form with document and photo attachments, the last submission, and a
//! profile placeholder.

mod app;
mod config;
mod device;
mod error;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AdmissionConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui::ScreenTable;

const LOG_FILE: &str = "admission-tui.log";

/// Non-blocking writer appending to `LOG_FILE` in `dir`.
///
/// Lines reach the file once the guard is dropped.
fn file_writer(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .ok()?;
    Some(tracing_appender::non_blocking(appender))
}

/// Log to a file in the data dir, or to stderr when none can be opened
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "admission_tui=info".into());

    match AdmissionConfig::log_dir().and_then(|dir| file_writer(&dir)) {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    let config = AdmissionConfig::load().unwrap_or_else(|err| {
        tracing::warn!("falling back to default config: {err:#}");
        AdmissionConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let screens = ScreenTable::standard();
    tracing::debug!(routes = ?screens.routes().collect::<Vec<_>>(), "screens registered");
    tracing::info!(route = app.current_route().label(), "starting");
    let result = run_app(&mut terminal, &mut app, &screens).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("exiting after error: {err:#}");
    }
    // Returned rather than exiting so the log guard drops and flushes
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    screens: &ScreenTable,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app, screens))?;

        // Faster polling while the tab indicator slides (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
