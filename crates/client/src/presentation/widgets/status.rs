//! Status line with the optional turn counter on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use runtime::Session;

pub fn render(frame: &mut Frame, area: Rect, session: &Session, show_turn: bool) {
    let turn = format!("Turn: {}", session.turn());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if show_turn { turn.len() as u16 } else { 0 }),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(session.status_line())), chunks[0]);
    if show_turn {
        frame.render_widget(Paragraph::new(Line::from(turn)), chunks[1]);
    }
}
