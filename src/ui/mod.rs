mod chart;
mod controls;
pub mod formatters;
mod modals;

use crate::app::{App, ChartMode, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    controls::draw_controls(frame, chunks[1], app);
    controls::draw_summary(frame, chunks[2], app);
    chart::draw_chart(frame, chunks[3], app);
    draw_footer(frame, chunks[4], app);

    if app.loading {
        modals::draw_loading(frame, chunks[3]);
    }
    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.loading {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", chrono::Local::now().format("%H:%M:%S"))
    };

    let selection = match (&app.view.primary, app.view.effective_mode()) {
        (None, _) => "No company selected".to_string(),
        (Some(a), ChartMode::Single) => a.to_string(),
        (Some(a), ChartMode::Compare) => match &app.view.compare {
            Some(b) => format!("{} vs {}", a, b),
            None => a.to_string(),
        },
    };

    let updated = app
        .last_updated
        .as_ref()
        .map(|t| format!(" updated {}", t))
        .unwrap_or_default();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Stock Dashboard ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(selection, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(updated, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = " [Tab] Focus [←→] Change [m] Mode [[ ]] Range [r] Refresh [s] Save PNG [?] Help [q] Quit ";
            if let Some(msg) = &app.status_message {
                Line::from(vec![
                    Span::styled(msg, Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
