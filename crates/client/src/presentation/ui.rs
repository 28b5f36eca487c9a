//! Frame composition.
//!
//! The play screen stacks the map, the message scrollback and the status
//! line. The log view replaces the whole screen until the next key.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};
use runtime::Session;

use super::terminal::Tui;
use super::widgets;
use crate::config::UiConfig;

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub session: &'a Session,
    pub ui: &'a UiConfig,
    pub showing_log: bool,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        if ctx.showing_log {
            widgets::log_view::render(frame, frame.area(), ctx.session.log());
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                       // Map
                Constraint::Length(ctx.ui.message_lines), // Messages
                Constraint::Length(1),                    // Status
            ])
            .split(frame.area());

        widgets::map::render(frame, chunks[0], ctx.session.world());
        widgets::messages::render(frame, chunks[1], ctx.session.log());
        widgets::status::render(frame, chunks[2], ctx.session, ctx.ui.show_turn);
    })?;

    Ok(())
}
