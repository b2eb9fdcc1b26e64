//! portfolio-term - a résumé presented as an interactive terminal
//!
//! This library provides the pieces behind the binary:
//! - Static résumé content and the command table
//! - Session state: input line, 20-entry history, output log
//! - Timed line-by-line reveal of animated sections
//! - Rendering of the terminal window with ratatui
//!
//! # Example
//!
//! ```no_run
//! use portfolio_term::event::{init_app_eventsource, AppEvent};
//! use portfolio_term::reveal::{Revealer, REVEAL_DELAY};
//! use portfolio_term::session::{Dispatch, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (app_event_tx, mut app_event_rx) = init_app_eventsource();
//!     let mut revealer = Revealer::new(app_event_tx, REVEAL_DELAY);
//!     let mut session = Session::default();
//!
//!     if let Dispatch::Reveal(seq) = session.dispatch("experience") {
//!         revealer.start(seq);
//!     }
//!
//!     // Lines arrive one per tick until the block is done
//!     while let Some(event) = app_event_rx.recv().await {
//!         match event {
//!             AppEvent::RevealLine { line, .. } => session.reveal_line(line),
//!             AppEvent::RevealFinished { id } => {
//!                 revealer.finish(id);
//!                 break;
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

pub mod app;
pub mod commands;
pub mod config;
pub mod event;
pub mod output;
pub mod reveal;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::App;
pub use config::Config;
pub use event::{init_app_eventsource, init_user_event, AppEvent, UserEvent};
pub use output::{OutputLine, Prompt, Segment};
pub use session::{Dispatch, Session};
