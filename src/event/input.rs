//! Key and mouse handling for the terminal pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::reveal::Revealer;
use crate::session::{Dispatch, Session};

const PAGE_ROWS: usize = 10;
const WHEEL_ROWS: usize = 3;

/// Handle a key press while the terminal pane is in normal mode.
///
/// Submissions go through the dispatcher; animated output is handed to the
/// revealer, which reports back through app events.
pub fn handle_key_event(session: &mut Session, revealer: &mut Revealer, key_evt: KeyEvent) {
    // AltGr arrives as Ctrl+Alt on Windows and is ordinary text
    let ctrl = key_evt.modifiers.contains(KeyModifiers::CONTROL)
        && !key_evt.modifiers.contains(KeyModifiers::ALT);
    let shift = key_evt.modifiers.contains(KeyModifiers::SHIFT);

    match key_evt.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => session.interrupt(),

        // Other control chords are not text
        KeyCode::Char(_) if ctrl => {}

        KeyCode::Char(c) => session.insert_char(c),

        KeyCode::Enter => match session.submit() {
            Dispatch::Reveal(seq) => {
                revealer.start(seq);
            }
            Dispatch::Cleared => revealer.on_clear(),
            Dispatch::Printed | Dispatch::NotFound => {}
        },

        KeyCode::Tab => session.complete(),

        // Scrollback
        KeyCode::Up if shift => session.output_mut().scroll_up(1),
        KeyCode::Down if shift => session.output_mut().scroll_down(1),
        KeyCode::PageUp => session.output_mut().scroll_up(PAGE_ROWS),
        KeyCode::PageDown => session.output_mut().scroll_down(PAGE_ROWS),

        // History recall
        KeyCode::Up => session.history_older(),
        KeyCode::Down => session.history_newer(),

        // Editing
        KeyCode::Backspace => session.backspace(),
        KeyCode::Delete => session.delete(),
        KeyCode::Left => session.move_left(),
        KeyCode::Right => session.move_right(),
        KeyCode::Home => session.move_home(),
        KeyCode::End => session.move_end(),

        KeyCode::Esc => session.output_mut().scroll_to_bottom(),

        _ => {}
    }
}

/// Mouse wheel scrolls the scrollback.
pub fn handle_mouse_event(session: &mut Session, mouse_evt: MouseEvent) {
    match mouse_evt.kind {
        MouseEventKind::ScrollUp => session.output_mut().scroll_up(WHEEL_ROWS),
        MouseEventKind::ScrollDown => session.output_mut().scroll_down(WHEEL_ROWS),
        _ => {}
    }
}
