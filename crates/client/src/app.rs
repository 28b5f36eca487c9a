//! Blocking render → input → dispatch loop.

use anyhow::Result;
use crossterm::event::{self, Event};
use runtime::{Flow, Session};

use crate::config::CliConfig;
use crate::input;
use crate::presentation::{self, RenderContext, Tui};

pub struct App {
    session: Session,
    config: CliConfig,
    showing_log: bool,
}

impl App {
    pub fn new(session: Session, config: CliConfig) -> Self {
        Self {
            session,
            config,
            showing_log: false,
        }
    }

    /// Runs until the quit binding fires. The session is shut down on
    /// return, even when the loop fails.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let outcome = self.event_loop(terminal);
        if !self.session.is_shut_down() {
            tracing::warn!("Input loop ended without quit; shutting down");
            self.session.shutdown()?;
        }
        tracing::info!("Quit at turn {}", self.session.turn());
        outcome
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            let ctx = RenderContext {
                session: &self.session,
                ui: &self.config.ui,
                showing_log: self.showing_log,
            };
            presentation::render(terminal, &ctx)?;

            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            let Some(code) = input::key_code(key_event) else {
                continue;
            };

            if self.showing_log {
                // Any key dismisses the log view without being dispatched.
                self.showing_log = false;
                terminal.clear()?;
                continue;
            }

            match self.session.handle_key(code)? {
                Flow::Continue => {}
                Flow::ShowLog => {
                    self.showing_log = true;
                    terminal.clear()?;
                }
                Flow::Quit => return Ok(()),
            }
        }
    }
}
