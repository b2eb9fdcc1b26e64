//! Main entry point for portfolio-term.
//!
//! Initializes logging and configuration, takes over the terminal, runs the
//! event loop, and restores the terminal on exit or panic.

use portfolio_term::app::App;
use portfolio_term::config::Config;
use portfolio_term::utils;
use portfolio_term::utils::guard::TerminalGuard;

use anyhow::Result;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    let _log_guard = utils::logger::init_logging();

    // Fail before touching the terminal so the error stays readable
    let config = Config::load_default()?;

    let mut terminal = ratatui::init();
    // Guard restores the terminal on both normal exit and panic
    let _terminal_guard = TerminalGuard::new();

    // Enable mouse capture for wheel scrolling
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(&config);
    // draw 1st frame
    app.draw(&mut terminal)?;
    // run event-driven main loop of app
    app.run(&mut terminal).await
}
