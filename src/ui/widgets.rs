use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::state::AppState;
use crate::format::{Direction, format_relative_time, is_now};
use crate::live::{LiveUpdater, TextElement, read_target};
use crate::ui::theme;
use crate::util::time::Clock;

/// Colour for an element's relative text, from its target rather than its rendered text.
pub fn relative_style(element: &TextElement, now: &DateTime<Utc>) -> Style {
    let Ok(target) = read_target(element) else {
        return theme::DIM;
    };
    let delta = target.signed_duration_since(*now);
    if is_now(delta) {
        return theme::DIM;
    }
    match Direction::of(delta) {
        Direction::Ago => theme::AGO,
        Direction::Later => theme::LATER,
    }
}

pub fn render_targets(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    updater: &LiveUpdater<TextElement>,
) {
    let block = Block::default()
        .title(format!(" Watching ({}) ", updater.len()))
        .borders(Borders::ALL)
        .border_style(theme::BORDER);

    if updater.is_empty() {
        let para = Paragraph::new(
            "Nothing to watch. Pass timestamps on the command line or add [[watch.targets]] to the config.",
        )
        .style(theme::DIM)
        .block(block);
        f.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Label").style(theme::HEADER),
        Cell::from("Target").style(theme::HEADER),
        Cell::from("Relative").style(theme::HEADER),
    ])
    .height(1);

    let now = updater.clock().now();
    let rows: Vec<Row> = updater
        .elements()
        .enumerate()
        .map(|(i, (_, element))| {
            let selected = i == state.cursor;
            let text_style = if selected {
                theme::HIGHLIGHT
            } else {
                relative_style(element, &now)
            };

            Row::new(vec![
                Cell::from(element.label.as_str()).style(if selected {
                    theme::HIGHLIGHT
                } else {
                    theme::LABEL
                }),
                Cell::from(element.certain_time.as_deref().unwrap_or("")).style(if selected {
                    theme::HIGHLIGHT
                } else {
                    theme::DIM
                }),
                Cell::from(element.text.as_str()).style(text_style),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(32),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme::HIGHLIGHT);

    f.render_widget(table, area);
}

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    updater: &LiveUpdater<TextElement>,
) {
    let key_hints = "j/k: move | r: reload | q: quit";

    let now = updater.clock().now();
    let refresh_info = state
        .last_refresh
        .as_ref()
        .map(|t| format!("refreshed {}", format_relative_time(t, &now)))
        .unwrap_or_default();

    let timer_info = if updater.is_active() {
        "live"
    } else {
        "idle"
    };
    let right_text = format!("{} | {}", timer_info, refresh_info);

    let padding = (area.width as usize).saturating_sub(key_hints.len() + right_text.len());

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(right_text, theme::STATUS_BAR),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}
