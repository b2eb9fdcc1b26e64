use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::theme;
use crate::output::Prompt;

/// Window chrome: three buttons, the prompt identity, and a key hint.
pub struct Header<'a> {
    pub prompt: &'a Prompt,
    pub command_mode: bool,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let buttons: Vec<Span> = theme::BUTTONS
            .iter()
            .flat_map(|&color| [Span::styled("●", Style::default().fg(color)), Span::raw(" ")])
            .collect();
        Paragraph::new(Line::from(buttons)).render(area, buf);

        let title = format!("{}@{}", self.prompt.user, self.prompt.host);
        Paragraph::new(Line::from(Span::styled(title, theme::dim())))
            .alignment(Alignment::Center)
            .render(area, buf);

        let hint = if self.command_mode {
            Span::styled("q quit · l redraw · any key back ", theme::accent())
        } else {
            Span::styled("Ctrl+B q quit ", theme::dim())
        };
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
