//! Animated line-by-line reveal of long command output.
//!
//! A [`RevealSequence`] is a lazy, restartable iterator over a static content
//! block. The [`Revealer`] drives sequences on tokio tasks, sending one
//! [`AppEvent::RevealLine`] per tick back to the main loop, which appends it
//! to the output log.
//!
//! Reveals are not cancelled when a new command runs or the log is cleared,
//! so an in-flight reveal keeps appending after `clear`. Every task is still
//! tracked by a [`RevealHandle`]; setting `cancel_stale_reveals` in the
//! config makes `clear` abort them.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::event::AppEvent;
use crate::output::{Block, OutputLine};

pub type RevealId = u64;

/// Default delay between revealed lines.
pub const REVEAL_DELAY: Duration = Duration::from_millis(80);

const MIN_DELAY: Duration = Duration::from_millis(1);

/// Iterator over the lines of a content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequence {
    block: Block,
    pos: usize,
}

impl RevealSequence {
    pub fn new(block: Block) -> Self {
        Self { block, pos: 0 }
    }

    /// Rewind to the first line.
    pub fn restart(&mut self) {
        self.pos = 0;
    }

    pub fn remaining(&self) -> usize {
        self.block.len() - self.pos
    }
}

impl Iterator for RevealSequence {
    type Item = OutputLine;

    fn next(&mut self) -> Option<OutputLine> {
        let segments = *self.block.get(self.pos)?;
        self.pos += 1;
        Some(OutputLine::Static(segments))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for RevealSequence {}

/// Handle to one in-flight reveal task.
#[derive(Debug)]
pub struct RevealHandle {
    abort: AbortHandle,
}

impl RevealHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Schedules reveal sequences onto the app event channel.
pub struct Revealer {
    delay: Duration,
    cancel_on_clear: bool,
    next_id: RevealId,
    in_flight: HashMap<RevealId, RevealHandle>,
    app_event_tx: UnboundedSender<AppEvent>,
}

impl Revealer {
    /// `delay` is raised to at least 1 ms.
    pub fn new(app_event_tx: UnboundedSender<AppEvent>, delay: Duration) -> Self {
        Self {
            delay: delay.max(MIN_DELAY),
            cancel_on_clear: false,
            next_id: 1,
            in_flight: HashMap::new(),
            app_event_tx,
        }
    }

    /// Abort in-flight reveals whenever the log is cleared.
    pub fn with_cancel_on_clear(mut self, flag: bool) -> Self {
        self.cancel_on_clear = flag;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start revealing `seq`: the first line is sent immediately, each
    /// following line one delay later. Must be called within a tokio runtime.
    pub fn start(&mut self, seq: RevealSequence) -> RevealId {
        let id = self.next_id;
        self.next_id += 1;

        let tx = self.app_event_tx.clone();
        let delay = self.delay;
        debug!(id, lines = seq.remaining(), "reveal started");

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(delay);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for line in seq {
                interval.tick().await;
                if tx.send(AppEvent::RevealLine { id, line }).is_err() {
                    // Loop is gone; nothing left to reveal into.
                    return;
                }
            }
            if tx.send(AppEvent::RevealFinished { id }).is_err() {
                debug!(id, "reveal finished after shutdown");
            }
        });

        self.in_flight.insert(id, RevealHandle { abort: task.abort_handle() });
        id
    }

    /// Forget a reveal that reported completion.
    pub fn finish(&mut self, id: RevealId) {
        if self.in_flight.remove(&id).is_some() {
            debug!(id, "reveal finished");
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, handle) in self.in_flight.drain() {
            handle.cancel();
            debug!(id, "reveal cancelled");
        }
    }

    /// Called after the log was cleared.
    pub fn on_clear(&mut self) {
        if self.cancel_on_clear {
            self.cancel_all();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn handle(&self, id: RevealId) -> Option<&RevealHandle> {
        self.in_flight.get(&id)
    }
}

impl Drop for Revealer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
