//! Session state and its transitions.
//!
//! A [`Session`] is created when the app starts and lives until it exits.
//! It owns the input line, the output log and the history ring, and is only
//! mutated through the input-controller methods and [`Session::dispatch`].

mod history;
mod input;
mod log;
mod tests;

pub use history::{HistoryRing, Recall, HISTORY_CAPACITY};
pub use input::InputBuffer;
pub use log::OutputLog;

use tracing::{debug, info};

use crate::commands::{self, Delivery, CLEAR};
use crate::output::{OutputLine, Prompt};
use crate::reveal::RevealSequence;

/// What a dispatched command did to the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The log was emptied (`clear`).
    Cleared,
    /// Echo and content were appended in one update.
    Printed,
    /// Echo and a `Command not found` line were appended.
    NotFound,
    /// The echo was appended; the content still has to be revealed.
    Reveal(RevealSequence),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    prompt: Prompt,
    input: InputBuffer,
    output: OutputLog,
    history: HistoryRing,
}

impl Session {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            ..Self::default()
        }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputLog {
        &mut self.output
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    // ---------------------------------------------------------------------
    // Input controller
    // ---------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        self.input.insert_char(c);
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    pub fn delete(&mut self) {
        self.input.delete();
    }

    pub fn move_left(&mut self) {
        self.input.move_left();
    }

    pub fn move_right(&mut self) {
        self.input.move_right();
    }

    pub fn move_home(&mut self) {
        self.input.move_home();
    }

    pub fn move_end(&mut self) {
        self.input.move_end();
    }

    /// Enter: dispatch the input, record it in history and reset the line.
    pub fn submit(&mut self) -> Dispatch {
        let command = self.input.take();
        let outcome = self.dispatch(&command);
        self.history.push(command);
        outcome
    }

    /// ArrowUp.
    pub fn history_older(&mut self) {
        if let Some(entry) = self.history.recall_older() {
            let entry = entry.to_string();
            self.input.set(entry);
        }
    }

    /// ArrowDown.
    pub fn history_newer(&mut self) {
        match self.history.recall_newer() {
            Recall::Entry(entry) => self.input.set(entry),
            Recall::Blank => self.input.clear(),
            Recall::Idle => {}
        }
    }

    /// Tab: replace the input with the first command it is a prefix of.
    pub fn complete(&mut self) {
        if let Some(name) = commands::complete(self.input.as_str()) {
            self.input.set(name);
        }
    }

    /// Ctrl+C: echo the abandoned input, print `^C` and drop it.
    /// Neither history nor the dispatcher sees it.
    pub fn interrupt(&mut self) {
        let abandoned = self.input.take();
        self.output.push(OutputLine::echo(abandoned));
        self.output.push(OutputLine::text("^C"));
    }

    // ---------------------------------------------------------------------
    // Dispatcher
    // ---------------------------------------------------------------------

    /// Resolve `raw` against the command table and update the log.
    ///
    /// `clear` is matched case-sensitively and replaces the log without an
    /// echo. Everything else is echoed verbatim, then looked up lowercased.
    pub fn dispatch(&mut self, raw: &str) -> Dispatch {
        if raw == CLEAR {
            debug!("clear");
            self.output.clear();
            return Dispatch::Cleared;
        }

        self.output.push(OutputLine::echo(raw));

        let Some(entry) = commands::lookup(&raw.to_lowercase()) else {
            info!(command = raw, "command not found");
            self.output.push(OutputLine::text(format!("Command not found: {}", raw)));
            return Dispatch::NotFound;
        };

        debug!(command = entry.name, delivery = ?entry.delivery, "dispatch");
        match entry.delivery {
            Delivery::Immediate => {
                self.output.extend(RevealSequence::new(entry.body));
                Dispatch::Printed
            }
            Delivery::Animated => Dispatch::Reveal(RevealSequence::new(entry.body)),
        }
    }

    /// Append one line produced by an in-flight reveal.
    pub fn reveal_line(&mut self, line: OutputLine) {
        self.output.push(line);
    }
}
