use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const BORDER: Style = Style::new().fg(Color::Cyan);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const LABEL: Style = Style::new().fg(Color::Yellow);

pub const LATER: Style = Style::new().fg(Color::Green);

pub const AGO: Style = Style::new().fg(Color::Magenta);
