//! pz-pair: terminal pairing panel for the PointZerver status service.
//!
//! ## Usage
//!
//! ```bash
//! # Poll the local PointZerver (default)
//! pz-pair
//!
//! # Poll a different endpoint
//! pz-pair --endpoint http://192.168.1.20:45460/status
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::Mutex;

use pz_pair::api::client::StatusClient;
use pz_pair::domain::App;
use pz_pair::poller::Poller;
use pz_pair::ui;

/// Status endpoint served by a local PointZerver.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:45460/status";

/// Terminal pairing panel for the PointZerver status service
#[derive(Parser, Debug)]
#[command(name = "pz-pair")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Status endpoint URL (overrides PZ_STATUS_URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "5000")]
    refresh_ms: u64,

    /// Show the error view on any failed poll, not only the first
    #[arg(long)]
    error_on_poll_failure: bool,

    /// Write diagnostic logs to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let endpoint = resolve_endpoint(args.endpoint);
    let client = StatusClient::new(&endpoint)?;

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Attempt terminal cleanup on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Shared app state between the UI loop and the poller task
    let app = Arc::new(Mutex::new(App::new(endpoint, args.error_on_poll_failure)));
    let poller = Poller::spawn(
        client.clone(),
        app.clone(),
        Duration::from_millis(args.refresh_ms),
    );

    let result = run_app(&mut terminal, app, client).await;

    poller.stop().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    client: StatusClient,
) -> Result<()> {
    loop {
        // Draw UI
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| ui::render(frame, &app_guard))?;
        }

        // Handle terminal events with a short poll timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            app.lock().await.should_quit = true;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            // Forced refresh, out of band with the poller
                            let outcome = client.try_fetch().await;
                            app.lock().await.apply_poll(outcome);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.lock().await.should_quit {
            return Ok(());
        }
    }
}

/// Resolve the endpoint: CLI flag, then PZ_STATUS_URL, then the default.
fn resolve_endpoint(arg: Option<String>) -> String {
    if let Some(endpoint) = arg {
        return endpoint;
    }
    if let Ok(endpoint) = std::env::var("PZ_STATUS_URL") {
        if !endpoint.is_empty() {
            return endpoint;
        }
    }
    DEFAULT_ENDPOINT.to_string()
}

/// Initialize tracing with a file writer.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
