use super::formatters::format_price;
use crate::app::App;
use crate::chart::ChartHandle;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

pub(super) const SERIES_COLORS: [Color; 2] = [Color::Rgb(179, 107, 255), Color::Rgb(0, 229, 255)];

fn chart_title(handle: &ChartHandle) -> String {
    let spec = handle.spec();
    let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
    let kind = if spec.is_compare() { "Compare" } else { "Price" };
    format!(" {}: {} | {} points ", kind, names.join(" vs "), spec.labels.len())
}

fn x_labels(handle: &ChartHandle) -> Vec<Span<'static>> {
    let spec = handle.spec();
    let (Some(first), Some(last)) = (spec.first_label(), spec.last_label()) else {
        return Vec::new();
    };
    match spec.labels.len() {
        1 => vec![Span::raw(first.to_string())],
        n => vec![
            Span::raw(first.to_string()),
            Span::raw(spec.labels[n / 2].clone()),
            Span::raw(last.to_string()),
        ],
    }
}

fn y_labels(handle: &ChartHandle) -> Vec<Span<'static>> {
    let [lo, hi] = handle.y_bounds();
    vec![
        Span::styled(format_price(lo), Style::default().fg(Color::Red)),
        Span::raw(format_price((lo + hi) / 2.0)),
        Span::styled(format_price(hi), Style::default().fg(Color::Green)),
    ]
}

pub fn draw_chart(frame: &mut Frame, area: Rect, app: &App) {
    let Some(handle) = app.chart() else {
        let message = if app.view.primary.is_none() {
            "Select a company to draw a chart"
        } else if app.loading {
            "Loading chart..."
        } else {
            "Chart data unavailable"
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Chart ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let datasets: Vec<Dataset> = handle
        .spec()
        .series
        .iter()
        .zip(handle.points())
        .enumerate()
        .map(|(i, (series, points))| {
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    chart_title(handle),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(handle.x_bounds())
                .labels(x_labels(handle)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(handle.y_bounds())
                .labels(y_labels(handle)),
        )
        .legend_position(Some(LegendPosition::TopLeft));

    frame.render_widget(chart, area);
}
