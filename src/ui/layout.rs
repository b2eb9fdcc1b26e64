use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, BorderType};

/// Screen areas, recomputed whenever the terminal is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalLayout {
    pub full_area: Rect,
    /// Window chrome row inside the border.
    pub header: Rect,
    /// Scrollback pane.
    pub body: Rect,
}

impl TerminalLayout {
    pub fn frame_block() -> Block<'static> {
        Block::bordered().border_type(BorderType::Rounded)
    }

    pub fn build(area: Rect) -> Self {
        let inner = Self::frame_block().inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header chrome
                Constraint::Length(1), // gap
                Constraint::Min(0),    // scrollback
            ])
            .split(inner);
        Self {
            full_area: area,
            header: chunks[0],
            body: chunks[2],
        }
    }
}
