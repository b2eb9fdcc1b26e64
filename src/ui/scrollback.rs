//! The scrollback pane: intro, output log and the live input row.
//!
//! Lines are wrapped per character at the pane width, the way a terminal
//! wraps, so leading indentation and column alignment in the content survive.
//! The visible window is anchored to the bottom and offset by the log's
//! scroll-back.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme;
use crate::commands::content;
use crate::output::{OutputLine, Prompt};
use crate::session::Session;

/// Split a styled line into rows no wider than `width` columns.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }
    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for span in line.spans {
        let style = span.style;
        let mut piece = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if row_width + w > width && row_width > 0 {
                if !piece.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut piece), style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                row_width = 0;
            }
            piece.push(ch);
            row_width += w;
        }
        if !piece.is_empty() {
            row.push(Span::styled(piece, style));
        }
    }
    rows.push(Line::from(row));
    rows
}

fn intro_lines(prompt: &Prompt) -> Vec<Line<'static>> {
    let mut lines = vec![theme::output_line(&OutputLine::echo("welcome"), prompt)];
    lines.extend(content::BANNER.iter().map(|row| Line::from(*row)));
    lines.extend(
        content::WELCOME
            .iter()
            .map(|segments| theme::output_line(&OutputLine::Static(*segments), prompt)),
    );
    lines
}

/// Wrapped rows of the whole pane, computed for one frame.
#[derive(Debug, Clone)]
pub struct ScrollbackView {
    rows: Vec<Line<'static>>,
    /// Row and column of the input cursor within `rows`.
    cursor: (usize, usize),
    scroll_back: usize,
}

impl ScrollbackView {
    pub fn new(session: &Session, width: u16) -> Self {
        let width = usize::from(width);
        let prompt = session.prompt();

        let mut rows = Vec::new();
        let logical = intro_lines(prompt).into_iter().chain(
            session
                .output()
                .lines()
                .iter()
                .map(|line| theme::output_line(line, prompt)),
        );
        for line in logical {
            rows.extend(wrap_line(line, width));
        }

        let input_start = rows.len();
        let mut input_line = theme::prompt_spans(prompt);
        input_line.push(Span::raw(session.input().as_str().to_string()));
        rows.extend(wrap_line(Line::from(input_line), width));

        let col = prompt.render().width() + session.input().before_cursor().width();
        let cursor = match width {
            0 => (input_start, 0),
            w => (input_start + col / w, col % w),
        };
        // Cursor just past a full last row sits on a fresh one
        while rows.len() <= cursor.0 {
            rows.push(Line::default());
        }

        Self {
            rows,
            cursor,
            scroll_back: session.output().scroll_back(),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Largest scroll-back that still fills the pane.
    pub fn max_scroll(&self, height: u16) -> usize {
        self.rows.len().saturating_sub(usize::from(height))
    }

    /// Index of the first visible row.
    fn top(&self, height: u16) -> usize {
        self.max_scroll(height).saturating_sub(self.scroll_back)
    }

    /// Screen position of the input cursor, if it is inside `area`.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let top = self.top(area.height);
        let (row, col) = self.cursor;
        if row < top || row >= top + usize::from(area.height) {
            return None;
        }
        let y = area.y + u16::try_from(row - top).ok()?;
        let x = area.x + u16::try_from(col).ok()?;
        Some((x, y))
    }
}

impl Widget for &ScrollbackView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<Line> = self
            .rows
            .iter()
            .skip(self.top(area.height))
            .take(usize::from(area.height))
            .cloned()
            .collect();
        Paragraph::new(visible).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Segment;
    use ratatui::style::Style;

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn intro_len() -> usize {
        1 + content::BANNER.len() + content::WELCOME.len()
    }

    #[test]
    fn test_wrap_short_line_is_untouched() {
        let rows = wrap_line(Line::from("abc"), 10);
        assert_eq!(rows.len(), 1);
        assert_eq!(row_text(&rows[0]), "abc");
    }

    #[test]
    fn test_wrap_splits_across_spans_keeping_style() {
        let line = Line::from(vec![Span::raw("abcd"), Span::styled("efgh", theme::accent())]);
        let rows = wrap_line(line, 3);
        let texts: Vec<_> = rows.iter().map(row_text).collect();
        assert_eq!(texts, vec!["abc", "def", "gh"]);
        assert_eq!(rows[1].spans[0].style, Style::default());
        assert_eq!(rows[1].spans[1].style, theme::accent());
        assert_eq!(rows[2].spans[0].style, theme::accent());
    }

    #[test]
    fn test_wrap_empty_line_keeps_one_row() {
        assert_eq!(wrap_line(Line::default(), 5).len(), 1);
    }

    #[test]
    fn test_view_ends_with_input_row() {
        let mut session = Session::default();
        for c in "abo".chars() {
            session.insert_char(c);
        }
        let view = ScrollbackView::new(&session, 200);
        assert_eq!(view.total_rows(), intro_len() + 1);
        assert_eq!(
            row_text(&view.rows[view.total_rows() - 1]),
            "visitor@terminal.prashant.dev:-$ abo"
        );
        assert_eq!(view.cursor, (intro_len(), 36));
    }

    #[test]
    fn test_cursor_visible_only_at_bottom() {
        let mut session = Session::default();
        session.submit();
        let view = ScrollbackView::new(&session, 100);
        let area = Rect::new(1, 3, 100, 5);
        let (x, y) = view.cursor_position(area).unwrap();
        assert_eq!(y, 3 + 4);
        assert_eq!(x, 1 + 33);

        session.output_mut().scroll_up(3);
        let view = ScrollbackView::new(&session, 100);
        assert_eq!(view.cursor_position(area), None);
    }

    #[test]
    fn test_render_shows_bottom_rows() {
        static LAST: &[Segment] = &[Segment::Text("last line")];
        let mut session = Session::default();
        session.reveal_line(OutputLine::Static(LAST));
        let view = ScrollbackView::new(&session, 40);
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        (&view).render(area, &mut buf);

        let rows: Vec<String> = buf
            .content
            .chunks(40)
            .map(|cells| cells.iter().map(|c| c.symbol()).collect::<String>())
            .collect();
        assert_eq!(rows[0].trim_end(), "last line");
        assert_eq!(rows[1].trim_end(), "visitor@terminal.prashant.dev:-$");
    }
}
