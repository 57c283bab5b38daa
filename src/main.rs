//! FormKit TUI - authentication and contact forms in the terminal
//!
//! A Ratatui-based demo shell for four client-side forms (sign in,
//! register, contact, password reset) sharing one form-state session,
//! one set of validation rules and a themeable look.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging into a file; stderr shares the terminal with the UI
    let log_file = TuiConfig::log_path().and_then(|path| TuiConfig::open_log(&path).ok());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formkit_tui=info".into()),
        )
        .with(log_file.map(|file| {
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
        }))
        .init();

    // A broken config file should not keep the forms from opening
    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config");
        TuiConfig::default()
    });
    let mut app = App::new(config, TuiConfig::config_path());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.drain_outcomes();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while the spinner and progress bar animate (16ms = ~60fps)
        let poll_duration = if app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
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
