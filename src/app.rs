//! Application state and main loop.
//!
//! [`App`] owns the session, the reveal scheduler and the event sources.
//! Every event is handled to completion on the loop and followed by a redraw,
//! so state changes are serialized without locks.

use crate::config::Config;
use crate::event::{AppEvent, UserEvent, init_app_eventsource, init_user_event};
use crate::event::input as input_event;
use crate::output::Prompt;
use crate::reveal::Revealer;
use crate::session::Session;
use crate::ui::Screen;
use crate::ui::layout::TerminalLayout;
use crate::ui::scrollback::ScrollbackView;

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{Receiver, UnboundedReceiver};
use tracing::{debug, info};

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

pub struct App {
    session: Session,
    revealer: Revealer,

    exit: bool,  // Should the app exit?
    command_mode: bool,  // Waiting for a command after Ctrl+B?
    force_redraw_flag: bool,  // Clear the screen before the next draw?

    // Recomputed when the terminal size changes
    layout: TerminalLayout,

    // events sources
    user_events: Receiver<std::io::Result<UserEvent>>,  // User input
    app_events: UnboundedReceiver<AppEvent>,  // Reveal steps
}

impl App {
    /// Must be called within a tokio runtime.
    pub fn new(config: &Config) -> Self {
        let (event_sink, app_events) = init_app_eventsource();
        let revealer = Revealer::new(event_sink, config.reveal_delay())
            .with_cancel_on_clear(config.cancel_stale_reveals);

        Self {
            session: Session::new(Prompt::from(&config.prompt)),
            revealer,
            exit: false,
            command_mode: false,
            force_redraw_flag: false,
            layout: TerminalLayout::default(),
            user_events: init_user_event(),
            app_events,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn get_command_mode(&self) -> bool {
        self.command_mode
    }

    pub fn set_command_mode(&mut self, flag: bool) {
        self.command_mode = flag;
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                info!("Exiting");
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let usr_evt = res.with_context(|| anyhow::anyhow!("User event stream is ended."))?;
                    self.handle_user_event(usr_evt.context("Failed to read terminal event")?);
                }
                res = self.app_events.recv() => {
                    let app_evt = res.with_context(|| anyhow::anyhow!("App event stream is ended"))?;
                    self.handle_app_event(app_evt);
                }
            }
            if self.force_redraw_flag {
                self.force_redraw_flag = false;
                self.force_redraw(terminal)?;
            } else {
                self.draw(terminal)?;
            }
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();

            if self.layout.full_area != area {
                self.layout = TerminalLayout::build(area);
            }

            let body = self.layout.body;
            let view = ScrollbackView::new(&self.session, body.width);
            self.session.output_mut().clamp_scroll(view.max_scroll(body.height));

            frame.render_widget(
                Screen {
                    layout: &self.layout,
                    session: &self.session,
                    view: &view,
                    command_mode: self.command_mode,
                },
                area,
            );

            // Leaving the cursor unset hides it
            if !self.command_mode {
                if let Some(pos) = view.cursor_position(body) {
                    frame.set_cursor_position(pos);
                }
            }
        }).context("Failed to draw frame")?;
        Ok(())
    }

    /// Clear the screen and redraw everything.
    pub fn force_redraw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;
        self.draw(terminal)
    }
}

impl App {
    fn handle_user_event(&mut self, event: UserEvent) {
        match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => {
                if self.command_mode {
                    self.handle_command_mode_key(key_evt.code);
                    return;
                }

                // Ctrl + B => Command Mode
                if key_evt.modifiers.contains(KeyModifiers::CONTROL) && matches!(key_evt.code, KeyCode::Char('b') | KeyCode::Char('B')) {
                    self.set_command_mode(true);
                    return;
                }

                input_event::handle_key_event(&mut self.session, &mut self.revealer, key_evt);
            }
            UserEvent::Mouse(mouse_evt) => {
                input_event::handle_mouse_event(&mut self.session, mouse_evt);
            }
            // Resize is picked up by the next draw
            _ => {}
        }
    }

    fn handle_command_mode_key(&mut self, code: KeyCode) {
        match code {
            // q => exit application
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.exit = true;
            }
            // l => force redraw
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.force_redraw_flag = true;
            }
            _ => {}
        }
        self.set_command_mode(false);
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RevealLine { id: _, line } => {
                self.session.reveal_line(line);
            }
            AppEvent::RevealFinished { id } => {
                self.revealer.finish(id);
                debug!(id, in_flight = self.revealer.in_flight(), "reveal done");
            }
        }
    }
}
