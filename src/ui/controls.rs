use super::chart::SERIES_COLORS;
use super::formatters::{format_stat, format_window, truncate_str};
use crate::api::Symbol;
use crate::app::{App, ChartMode, Control};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn symbol_label(symbol: Option<&Symbol>) -> String {
    symbol
        .map(|s| truncate_str(s.as_str(), 14))
        .unwrap_or_else(|| "Select Company".to_string())
}

fn control_box(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color, focused: bool, dimmed: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };
    let content = if focused {
        Line::from(vec![
            Span::styled("< ", border),
            Span::styled(value, value_style),
            Span::styled(" >", border),
        ])
    } else {
        Line::from(Span::styled(value, value_style))
    };
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

pub fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let single = app.view.mode == ChartMode::Single;
    control_box(
        frame,
        chunks[0],
        "Company A",
        symbol_label(app.view.primary.as_ref()),
        SERIES_COLORS[0],
        app.focus == Control::Primary,
        false,
    );
    control_box(
        frame,
        chunks[1],
        "Company B",
        symbol_label(app.view.compare.as_ref()),
        SERIES_COLORS[1],
        app.focus == Control::Compare,
        single,
    );
    control_box(
        frame,
        chunks[2],
        "Mode",
        app.view.mode.label().to_string(),
        Color::Yellow,
        app.focus == Control::Mode,
        false,
    );
    control_box(
        frame,
        chunks[3],
        "Range",
        format_window(app.view.window_days()),
        Color::Magenta,
        app.focus == Control::Range,
        false,
    );
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL));
    frame.render_widget(card, area);
}

/// 52-week high/low and average close for the primary symbol.
pub fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = app.summary.clone().unwrap_or_default();
    let suffix = app
        .summary_symbol
        .as_ref()
        .map(|s| format!(" ({})", s))
        .unwrap_or_default();

    stat_card(frame, chunks[0], &format!("52W High{}", suffix), format_stat(stats.week52_high), Color::Green);
    stat_card(frame, chunks[1], &format!("52W Low{}", suffix), format_stat(stats.week52_low), Color::Red);
    stat_card(frame, chunks[2], &format!("Avg Close{}", suffix), format_stat(stats.avg_close), Color::Cyan);
}
