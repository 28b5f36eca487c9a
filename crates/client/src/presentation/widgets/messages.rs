//! Message scrollback above the status line, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{List, ListDirection, ListItem},
};
use runtime::GameLog;

pub fn render(frame: &mut Frame, area: Rect, log: &GameLog) {
    let height = area.height as usize;
    let notice = log.notice().into_iter();
    let items: Vec<ListItem> = notice
        .chain(log.messages().recent(height))
        .take(height)
        .map(ListItem::new)
        .collect();

    let list = List::new(items).direction(ListDirection::BottomToTop);
    frame.render_widget(list, area);
}
