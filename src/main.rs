//! glance - a terminal dashboard for weather, news and stock prices.
//!
//! This is the main binary: it loads the configuration, starts the fetch
//! dispatcher and runs the TUI on the route named by the first argument.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use glance_config::{Config, Preferences, ThemeMode};
use glance_protocol::Route;
use glance_providers::{DashboardClient, spawn_fetcher};
use glance_tui::{App, terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter. Logging is off when unset.
const LOG_ENV: &str = "GLANCE_LOG";

/// Filter used when `GLANCE_LOG` is set but empty or invalid.
const DEFAULT_FILTER: &str = "glance=info,warn";

fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("glance").join("glance.log"))
}

/// Installs a file logger when `GLANCE_LOG` is set.
///
/// The TUI owns stdout, so records are appended to
/// `<cache dir>/glance/glance.log`.
fn init_tracing() -> anyhow::Result<()> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let path = log_path().context("no cache directory for the log file")?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_new(directives.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)))
        .init();
    Ok(())
}

/// Reads the persisted theme. An unreadable file falls back to the default.
fn load_theme(path: Option<&PathBuf>) -> ThemeMode {
    let Some(path) = path else {
        return ThemeMode::default();
    };
    match Preferences::load_from(path) {
        Ok(preferences) => preferences.unwrap_or_default().theme,
        Err(error) => {
            warn!(%error, "ignoring unreadable preferences");
            ThemeMode::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let route = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Route>()?,
        None => Route::Dashboard,
    };

    let config = Config::load()
        .context("failed to load configuration")?
        .with_env_overrides();
    config.validate().context("invalid configuration")?;
    let client = DashboardClient::new(&config)?;

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let dispatcher = spawn_fetcher(client, request_rx, outcome_tx);

    let preferences_path = Preferences::default_path().ok();
    let theme = load_theme(preferences_path.as_ref());
    info!(%route, ?theme, "starting glance");

    let mut app = App::new(route, request_tx, outcome_rx).with_theme(theme);
    if let Some(path) = preferences_path {
        app = app.with_preferences_path(path);
    }

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    // Closing the request channel stops the dispatcher.
    drop(app);
    if let Err(error) = dispatcher.await {
        warn!(%error, "fetch dispatcher ended abnormally");
    }

    result
}
