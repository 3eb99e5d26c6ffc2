use super::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const KEYS: [(&str, &str); 9] = [
    ("Tab / Shift-Tab", "Move between controls"),
    ("← → / h l", "Change the focused control"),
    ("m", "Toggle single / compare"),
    ("[ ]", "Shorter / longer range"),
    ("r", "Refresh"),
    ("s", "Save chart as PNG"),
    ("?", "Toggle this help"),
    ("Esc / Enter", "Close help"),
    ("q", "Quit"),
];

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(action),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, area);
}

/// Small overlay centered on `area` while a cycle is in flight.
pub fn draw_loading(frame: &mut Frame, area: Rect) {
    let width = 20.min(area.width);
    let height = 3.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);
    let loading = Paragraph::new("Loading...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
    frame.render_widget(loading, popup);
}
