//! Submitted-command history with up/down recall.
//!
//! Entries are kept most-recent-first. Recall walks a cursor from the newest
//! entry towards the oldest and back; the cursor is dropped on every push.

use std::collections::VecDeque;

/// Maximum number of commands to keep in history.
pub const HISTORY_CAPACITY: usize = 20;

/// Result of stepping the recall cursor towards newer entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Load this entry into the input.
    Entry(String),
    /// Stepped past the newest entry: blank the input.
    Blank,
    /// No recall in progress; leave the input alone.
    Idle,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    cursor: Option<usize>,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission at the front, evicting the oldest past capacity.
    pub fn push(&mut self, cmd: String) {
        self.entries.push_front(cmd);
        self.entries.truncate(HISTORY_CAPACITY);
        self.cursor = None;
    }

    /// ArrowUp: start recalling at the newest entry, or step one older.
    /// Returns `None` when there is nothing (older) to load.
    pub fn recall_older(&mut self) -> Option<&str> {
        let next = match self.cursor {
            None if !self.entries.is_empty() => 0,
            Some(idx) if idx + 1 < self.entries.len() => idx + 1,
            _ => return None,
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// ArrowDown: step one newer, or leave recall when already at the newest.
    pub fn recall_newer(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Idle,
            Some(0) => {
                self.cursor = None;
                Recall::Blank
            }
            Some(idx) => {
                self.cursor = Some(idx - 1);
                self.entries
                    .get(idx - 1)
                    .map_or(Recall::Blank, |s| Recall::Entry(s.clone()))
            }
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(cmds: &[&str]) -> HistoryRing {
        let mut h = HistoryRing::new();
        for c in cmds {
            h.push(c.to_string());
        }
        h
    }

    #[test]
    fn test_push_is_most_recent_first() {
        let h = ring(&["a", "b", "c"]);
        assert_eq!(h.entries().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut h = HistoryRing::new();
        for i in 0..21 {
            h.push(format!("cmd{}", i));
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.entries().next(), Some("cmd20"));
        assert_eq!(h.entries().last(), Some("cmd1"));
        assert!(!h.entries().any(|e| e == "cmd0"));
    }

    #[test]
    fn test_recall_older_empty() {
        let mut h = HistoryRing::new();
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn test_recall_older_stops_at_oldest() {
        let mut h = ring(&["a", "b", "c"]);
        assert_eq!(h.recall_older(), Some("c"));
        assert_eq!(h.recall_older(), Some("b"));
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.cursor(), Some(2));
    }

    #[test]
    fn test_recall_newer_walks_back_then_blanks_once() {
        let mut h = ring(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), Recall::Entry("b".to_string()));
        assert_eq!(h.recall_newer(), Recall::Blank);
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_newer(), Recall::Idle);
        assert_eq!(h.recall_newer(), Recall::Idle);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut h = ring(&["a", "b"]);
        h.recall_older();
        assert_eq!(h.cursor(), Some(0));
        h.push("c".to_string());
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_older(), Some("c"));
    }

    #[test]
    fn test_empty_submissions_are_recorded() {
        let h = ring(&["about", ""]);
        assert_eq!(h.entries().collect::<Vec<_>>(), vec!["", "about"]);
    }
}
