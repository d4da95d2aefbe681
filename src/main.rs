//! PowerGrid Leads - terminal lead capture for PowerGrid BESS
//!
//! A Ratatui-based contact form that collects a sales lead, validates it
//! and submits it through a simulated transport.

mod app;
mod config;
mod platform;
mod state;
mod transport;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::LeadsConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Config comes first so logging can honour `log_file`
    let (config, config_error) = match LeadsConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (LeadsConfig::default(), Some(err)),
    };

    init_logging(config.log_path());
    if let Some(err) = config_error {
        tracing::error!("Failed to load config, using defaults: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Default filter when logs go to a file
const FILE_FILTER: &str = "powergrid_leads=info";

/// Default filter when logs share the terminal with the UI; anything
/// chattier would be painted over the form
const STDERR_FILTER: &str = "powergrid_leads=error";

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(file)
}

/// Install the tracing subscriber. Logs go to `log_path` when it can be
/// opened; otherwise only errors reach stderr. `RUST_LOG` overrides either.
fn init_logging(log_path: Option<PathBuf>) {
    let (log_file, open_error) = match log_path.as_deref().map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    let default_filter = if log_file.is_some() {
        FILE_FILTER
    } else {
        STDERR_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
    });
    let stderr_layer = file_layer
        .is_none()
        .then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    if let Some(err) = open_error {
        tracing::error!("{err:#}; logging errors to stderr instead");
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Get terminal size for animation calculations
        let terminal_height = terminal.size()?.height;

        // Update splash animation if active
        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(terminal_height);
        }

        // Apply a finished submission before drawing
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation or while the spinner runs (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if in_splash || app.form.status().is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // crossterm blocks, so keep it off the runtime's worker thread
        let next_event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(poll_duration)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })?;

        match next_event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key)?;
            }
            Some(Event::Resize(_width, _height)) => {
                // Layout is recomputed on the next draw
            }
            _ => {}
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
