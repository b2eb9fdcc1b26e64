//! Rendering.
//!
//! One frame is the rounded window frame, the [`header::Header`] chrome and
//! the [`scrollback::ScrollbackView`]. Rendering is a pure function of the
//! session; the app recomputes the view on every draw.

pub mod header;
pub mod layout;
pub mod scrollback;
pub mod theme;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::session::Session;
use header::Header;
use layout::TerminalLayout;
use scrollback::ScrollbackView;

/// The whole terminal window for one frame.
pub struct Screen<'a> {
    pub layout: &'a TerminalLayout,
    pub session: &'a Session,
    pub view: &'a ScrollbackView,
    pub command_mode: bool,
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        TerminalLayout::frame_block().render(area, buf);
        Header {
            prompt: self.session.prompt(),
            command_mode: self.command_mode,
        }
        .render(self.layout.header, buf);
        self.view.render(self.layout.body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_rows(session: &Session, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let layout = TerminalLayout::build(area);
        let view = ScrollbackView::new(session, layout.body.width);
        let mut buf = Buffer::empty(area);
        Screen {
            layout: &layout,
            session,
            view: &view,
            command_mode: false,
        }
        .render(area, &mut buf);
        buf.content
            .chunks(usize::from(width))
            .map(|cells| cells.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_frame_has_chrome_and_prompt() {
        let session = Session::default();
        let rows = screen_rows(&session, 100, 30);
        assert!(rows[0].starts_with('╭'));
        assert!(rows[1].contains("● ● ●"));
        assert!(rows[1].contains("visitor@terminal.prashant.dev"));
        assert!(rows[1].contains("Ctrl+B q quit"));
        // 15 intro rows start at the top of the body (row 3)
        assert!(rows[18].starts_with("│visitor@terminal.prashant.dev:-$"));
        assert!(rows[19].trim_matches(|c: char| c == '│' || c == ' ').is_empty());
    }

    #[test]
    fn test_output_appears_above_input() {
        let mut session = Session::default();
        for c in "nope".chars() {
            session.insert_char(c);
        }
        session.submit();
        let rows = screen_rows(&session, 100, 30);
        assert!(rows[18].contains("visitor@terminal.prashant.dev:-$ nope"));
        assert!(rows[19].contains("Command not found: nope"));
        assert!(rows[20].contains("visitor@terminal.prashant.dev:-$"));

        let short = screen_rows(&session, 100, 12);
        assert!(short[9].contains("Command not found: nope"));
        assert!(short[10].contains("visitor@terminal.prashant.dev:-$"));
    }

    #[test]
    fn test_contacts_show_link_targets() {
        let mut session = Session::default();
        let crate::session::Dispatch::Reveal(seq) = session.dispatch("contacts") else {
            panic!("contacts should be revealed");
        };
        for line in seq {
            session.reveal_line(line);
        }
        let screen = screen_rows(&session, 160, 40).join("\n");
        assert!(screen.contains("linkedin <https://www.linkedin.com/in/call-prashant>"));
        assert!(screen.contains("Gmail <ppandey1201@gmail.com>"));
        // no target, nothing appended
        assert!(screen.contains("+91 9029103637    |"));
    }
}
