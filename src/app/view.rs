use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::live::{LiveUpdater, TextElement};
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState, updater: &LiveUpdater<TextElement>) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    widgets::render_targets(f, vertical[0], state, updater);
    widgets::render_status_bar(f, vertical[1], state, updater);
}
