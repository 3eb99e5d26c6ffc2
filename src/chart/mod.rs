pub mod png;

use crate::api::PricePoint;

/// One named line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// What to draw: a shared date axis and one or two series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn is_compare(&self) -> bool {
        self.series.len() > 1
    }

    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    pub fn last_label(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}

fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}

pub fn build_single_spec(points: &[PricePoint], label: &str) -> ChartSpec {
    ChartSpec {
        labels: points.iter().map(|p| p.date.clone()).collect(),
        series: vec![Series {
            name: label.to_string(),
            values: closes(points),
        }],
    }
}

/// Labels come from series A only. Series B is placed by index, so series of
/// different lengths or dates are not realigned.
pub fn build_compare_spec(
    points_a: &[PricePoint],
    points_b: &[PricePoint],
    label_a: &str,
    label_b: &str,
) -> ChartSpec {
    let mut spec = build_single_spec(points_a, label_a);
    spec.series.push(Series {
        name: label_b.to_string(),
        values: closes(points_b),
    });
    spec
}

/// A drawn chart. Holds the spec plus the plot coordinates derived from it.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    spec: ChartSpec,
    points: Vec<Vec<(f64, f64)>>,
    x_max: f64,
    y_bounds: [f64; 2],
}

impl ChartHandle {
    fn new(id: u64, spec: ChartSpec) -> Self {
        let points: Vec<Vec<(f64, f64)>> = spec
            .series
            .iter()
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, &v)| (i as f64, v))
                    .collect()
            })
            .collect();

        let longest = spec.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        let x_max = longest.saturating_sub(1).max(1) as f64;

        let (min, max) = spec
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let y_bounds = if min.is_finite() && max.is_finite() {
            let pad = ((max - min) * 0.05).max(max.abs() * 0.01).max(0.5);
            [min - pad, max + pad]
        } else {
            [0.0, 1.0]
        };

        Self {
            id,
            spec,
            points,
            x_max,
            y_bounds,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// `(index, close)` pairs per series, in the spec's series order.
    /// Non-finite closes are left out.
    pub fn points(&self) -> &[Vec<(f64, f64)>] {
        &self.points
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.x_max]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    fn dispose(self) {
        tracing::debug!(chart = self.id, "disposing chart");
    }
}

/// Owns the single chart slot. Every draw replaces the previous chart.
#[derive(Debug, Default)]
pub struct Renderer {
    current: Option<ChartHandle>,
    next_id: u64,
    disposed: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, spec: ChartSpec) -> &ChartHandle {
        if let Some(previous) = self.current.take() {
            previous.dispose();
            self.disposed += 1;
        }
        self.next_id += 1;
        tracing::debug!(
            chart = self.next_id,
            series = spec.series.len(),
            labels = spec.labels.len(),
            "drawing chart"
        );
        self.current.insert(ChartHandle::new(self.next_id, spec))
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// Number of charts replaced so far.
    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }
}
