//! Terminal restore guard.

use crossterm::event::DisableMouseCapture;
use crossterm::execute;

/// Restores the terminal when dropped, including while unwinding from a panic.
///
/// Create it right after `ratatui::init()` and mouse capture are enabled.
#[must_use = "the terminal is restored when the guard is dropped"]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
            tracing::error!("Failed to disable mouse capture: {}", e);
        }
        ratatui::restore();
        tracing::info!("Terminal restored");
    }
}
