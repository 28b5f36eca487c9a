//! Full-screen durable log, newest entry on the bottom row.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{List, ListDirection, ListItem},
};
use runtime::GameLog;

pub fn render(frame: &mut Frame, area: Rect, log: &GameLog) {
    let items: Vec<ListItem> = log
        .entries()
        .recent(area.height as usize)
        .map(ListItem::new)
        .collect();

    let list = List::new(items).direction(ListDirection::BottomToTop);
    frame.render_widget(list, area);
}
