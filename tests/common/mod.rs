#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use stockdash::api::records::trailing;
use stockdash::api::{MarketData, PricePoint, SourceError, SourceResult, Symbol, SummaryStats};
use stockdash::app::{App, AppEvent};
use stockdash::config::Config;
use tokio::sync::mpsc::UnboundedReceiver;

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

pub fn make_point(date: &str, close: f64) -> PricePoint {
    PricePoint {
        date: date.to_string(),
        close,
        high: Some(close + 1.0),
        low: Some(close - 1.0),
    }
}

/// `count` consecutive days starting at 2024-01-01 with closes 1.0, 2.0, ...
pub fn make_series(count: usize) -> Vec<PricePoint> {
    (0..count)
        .map(|i| make_point(&format!("2024-01-{:02}", i + 1), (i + 1) as f64))
        .collect()
}

pub fn make_stats(high: f64, low: f64, avg: f64) -> SummaryStats {
    SummaryStats {
        week52_high: Some(high),
        week52_low: Some(low),
        avg_close: Some(avg),
    }
}

/// In-memory backend. Unknown symbols fail as unavailable. Series are cut to
/// the requested window, like the HTTP client does.
#[derive(Default)]
pub struct FakeSource {
    pub symbols: Option<Vec<Symbol>>,
    pub series: HashMap<String, Vec<PricePoint>>,
    pub summaries: HashMap<String, SummaryStats>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new(symbols: &[&str]) -> Self {
        Self {
            symbols: Some(symbols.iter().map(|s| sym(s)).collect()),
            ..Self::default()
        }
    }

    pub fn with_series(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.series.insert(symbol.to_string(), points);
        self
    }

    pub fn with_summary(mut self, symbol: &str, stats: SummaryStats) -> Self {
        self.summaries.insert(symbol.to_string(), stats);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MarketData for FakeSource {
    async fn list_symbols(&self) -> SourceResult<Vec<Symbol>> {
        self.record("companies".to_string());
        self.symbols
            .clone()
            .ok_or_else(|| SourceError::Unavailable("connection refused".to_string()))
    }

    async fn fetch_series(&self, symbol: &Symbol, window_days: usize) -> SourceResult<Vec<PricePoint>> {
        self.record(format!("data/{}", symbol));
        self.series
            .get(symbol.as_str())
            .cloned()
            .map(|points| trailing(points, window_days))
            .ok_or_else(|| SourceError::Unavailable(format!("no data for {}", symbol)))
    }

    async fn fetch_summary(&self, symbol: &Symbol) -> SourceResult<SummaryStats> {
        self.record(format!("summary/{}", symbol));
        self.summaries
            .get(symbol.as_str())
            .cloned()
            .ok_or_else(|| SourceError::Malformed(format!("no summary for {}", symbol)))
    }
}

pub fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// App with default config; nothing touches disk.
pub fn test_app() -> App {
    App::new(Config::default())
}

pub fn test_app_with_symbols(symbols: &[&str]) -> App {
    let mut app = test_app();
    app.symbols = symbols.iter().map(|s| sym(s)).collect();
    app
}
