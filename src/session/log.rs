//! Append-only output log with a bottom-anchored scroll offset.

use crate::output::OutputLine;

#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
    /// Rows scrolled up from the bottom. 0 means pinned to the bottom.
    scroll_back: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
        self.scroll_back = 0;
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.lines.extend(lines);
        self.scroll_back = 0;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_back > 0
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Keep the offset within what the view can actually show.
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_back = self.scroll_back.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_pins_to_bottom() {
        let mut log = OutputLog::new();
        log.push(OutputLine::text("one"));
        log.scroll_up(5);
        assert!(log.is_scrolled());
        log.push(OutputLine::text("two"));
        assert_eq!(log.scroll_back(), 0);

        log.scroll_up(3);
        log.extend([OutputLine::text("three")]);
        assert_eq!(log.scroll_back(), 0);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_clear_empties_and_pins() {
        let mut log = OutputLog::new();
        log.extend([OutputLine::text("a"), OutputLine::text("b")]);
        log.scroll_up(1);
        log.clear();
        assert!(log.is_empty());
        assert!(!log.is_scrolled());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut log = OutputLog::new();
        log.scroll_down(4);
        assert_eq!(log.scroll_back(), 0);
        log.scroll_up(10);
        log.clamp_scroll(6);
        assert_eq!(log.scroll_back(), 6);
        log.scroll_down(2);
        assert_eq!(log.scroll_back(), 4);
        log.scroll_to_bottom();
        assert_eq!(log.scroll_back(), 0);
    }
}
