use super::error::{SourceError, SourceResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

const CLOSE_ALIASES: [&str; 5] = ["Close", "close", "Adj Close", "adj_close", "adj close"];
const HIGH_ALIASES: [&str; 2] = ["High", "high"];
const LOW_ALIASES: [&str; 2] = ["Low", "low"];
const DATE_ALIASES: [&str; 2] = ["Date", "date"];

/// Ticker identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Kept exactly as given; only all-blank input is rejected.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One trading day of a price series.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Date exactly as the source sent it.
    pub date: String,
    pub close: f64,
    pub high: Option<f64>,
    pub low: Option<f64>,
}

/// Precomputed statistics for one symbol; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStats {
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    pub avg_close: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CompaniesResponse {
    #[serde(default)]
    companies: Option<Vec<Value>>,
}

/// Accepts JSON numbers and numeric strings; everything else is absent.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn first_numeric(record: &Map<String, Value>, aliases: &[&str]) -> Option<f64> {
    aliases
        .iter()
        .find_map(|key| record.get(*key).and_then(numeric))
}

fn first_text(record: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl PricePoint {
    /// Map one source record onto a price point, resolving field aliases.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            date: first_text(record, &DATE_ALIASES).unwrap_or_default(),
            close: first_numeric(record, &CLOSE_ALIASES).unwrap_or(0.0),
            high: first_numeric(record, &HIGH_ALIASES),
            low: first_numeric(record, &LOW_ALIASES),
        }
    }
}

/// Keep the trailing `window` points, preserving order.
pub fn trailing<T>(mut items: Vec<T>, window: usize) -> Vec<T> {
    let start = items.len().saturating_sub(window);
    items.split_off(start)
}

pub fn parse_companies(body: &str) -> SourceResult<Vec<Symbol>> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(SourceError::Malformed(
            "companies payload is not an object".to_string(),
        ));
    }
    let data: CompaniesResponse = serde_json::from_value(value)?;
    let symbols = data
        .companies
        .unwrap_or_default()
        .iter()
        .filter_map(|v| v.as_str().and_then(Symbol::new))
        .collect();
    Ok(symbols)
}

pub fn parse_series(body: &str) -> SourceResult<Vec<PricePoint>> {
    let value: Value = serde_json::from_str(body)?;
    let records = match value {
        Value::Array(records) => records,
        Value::Object(obj) => {
            let detail = obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("expected an array of records");
            return Err(SourceError::Malformed(detail.to_string()));
        }
        _ => {
            return Err(SourceError::Malformed(
                "expected an array of records".to_string(),
            ));
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .as_object()
                .map(PricePoint::from_record)
                .ok_or_else(|| SourceError::Malformed(format!("record {} is not an object", i)))
        })
        .collect()
}

pub fn parse_summary(body: &str) -> SourceResult<SummaryStats> {
    let value: Value = serde_json::from_str(body)?;
    let obj = value
        .as_object()
        .ok_or_else(|| SourceError::Malformed("summary payload is not an object".to_string()))?;

    if let Some(err) = obj.get("error") {
        tracing::warn!(error = %err, "summary endpoint reported an error");
    }

    Ok(SummaryStats {
        week52_high: obj.get("52_week_high").and_then(numeric),
        week52_low: obj.get("52_week_low").and_then(numeric),
        avg_close: obj.get("avg_close").and_then(numeric),
    })
}
