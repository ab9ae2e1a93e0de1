//! Terminal setup and teardown.
//!
//! The dashboard runs on the alternate screen in raw mode with mouse capture
//! on, so headlines, presets and overlay buttons can be clicked. Every exit
//! path, panics included, must hand the terminal back in its original mode.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Result type for terminal operations.
pub type Result<T> = std::result::Result<T, TerminalError>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Leaves raw mode, mouse capture and the alternate screen on `out`.
fn leave(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

/// Enters raw mode and the alternate screen with mouse capture enabled.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use glance_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal()?;
/// // Draw the dashboard...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok::<(), glance_tui::terminal::TerminalError>(())
/// ```
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Returns the terminal to its original mode and shows the cursor.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    leave(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal, then runs the hook
/// that was installed before.
///
/// Call it once, before [`setup_terminal`], so the panic message lands on
/// the normal screen instead of the discarded alternate one.
///
/// # Examples
///
/// ```no_run
/// use glance_tui::terminal;
///
/// terminal::install_panic_hook();
/// let mut terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// ```
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort: the process is going down either way.
        let _ = leave(&mut io::stdout());
        original_hook(panic_info);
    }));
}
