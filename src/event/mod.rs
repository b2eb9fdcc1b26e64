//! Event sources feeding the main loop.
//!
//! Two channels are merged by the `select!` in [`crate::app::App::run`]:
//!
//! - **User Events**: key, mouse and resize events read from the terminal on a
//!   dedicated thread, so input stays responsive.
//! - **App Events**: reveal steps sent by the animated renderer's tasks.
//!
//! All state mutation happens on the loop, one event at a time.
//!
//! # Submodules
//!
//! - `input`: key and mouse handling for the terminal pane

pub mod input;

use std::thread;

use tokio::sync::mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender};
use std::io::Result;

use crate::output::OutputLine;
use crate::reveal::RevealId;

/// User input events from the terminal.
pub type UserEvent = crossterm::event::Event;

/// Initializes the user event stream.
///
/// Spawns a thread that blocks on `crossterm::event::read()` and forwards
/// every result. The thread ends once the receiver is dropped.
pub fn init_user_event() -> Receiver<Result<UserEvent>> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        loop {
            if tx.blocking_send(crossterm::event::read()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Application-wide events.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppEvent {
    /// The next line of an in-flight reveal is due.
    RevealLine { id: RevealId, line: OutputLine },
    /// A reveal has emitted its last line.
    RevealFinished { id: RevealId },
}

/// Initializes the application event channel.
///
/// Unbounded: reveal tasks send at most one line per tick and must never
/// block on a slow consumer.
pub fn init_app_eventsource() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}
