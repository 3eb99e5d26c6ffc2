use super::view_state::{ChartMode, ViewState};
use crate::api::{MarketData, SourceError, Symbol, SummaryStats};
use crate::chart::{build_compare_spec, build_single_spec, ChartSpec};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// What started a render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    InitialLoad,
    PrimaryChanged,
    CompareChanged,
    ModeChanged,
    RangeChanged,
    Refresh,
}

/// Snapshot of the view state a cycle works from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub cycle: u64,
    pub trigger: Trigger,
    pub primary: Symbol,
    /// Set only when the effective mode is Compare.
    pub compare: Option<Symbol>,
    pub window_days: u32,
}

impl RenderRequest {
    /// `None` when no primary symbol is selected.
    pub fn from_view(cycle: u64, trigger: Trigger, view: &ViewState) -> Option<Self> {
        let primary = view.primary.clone()?;
        let compare = match view.effective_mode() {
            ChartMode::Compare => view.compare.clone(),
            ChartMode::Single => None,
        };
        Some(Self {
            cycle,
            trigger,
            primary,
            compare,
            window_days: view.window_days(),
        })
    }
}

/// Messages from background work back to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SymbolsLoaded(Vec<Symbol>),
    SummaryLoaded {
        cycle: u64,
        symbol: Symbol,
        stats: SummaryStats,
    },
    ChartReady {
        cycle: u64,
        spec: ChartSpec,
    },
    CycleFailed {
        cycle: u64,
        error: SourceError,
    },
    CycleFinished {
        cycle: u64,
    },
}

/// Fetch the symbol list. Failures are logged and reported as an empty list.
pub async fn load_symbols<S: MarketData>(source: &S, tx: &UnboundedSender<AppEvent>) {
    let symbols = match source.list_symbols().await {
        Ok(symbols) => {
            tracing::info!(count = symbols.len(), "loaded symbols");
            symbols
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load symbols");
            Vec::new()
        }
    };
    let _ = tx.send(AppEvent::SymbolsLoaded(symbols));
}

async fn fetch_and_draw<S: MarketData>(
    source: &S,
    request: &RenderRequest,
    tx: &UnboundedSender<AppEvent>,
) -> Result<(), SourceError> {
    let window = request.window_days as usize;
    let series_a = source.fetch_series(&request.primary, window).await?;

    let stats = source.fetch_summary(&request.primary).await?;
    let _ = tx.send(AppEvent::SummaryLoaded {
        cycle: request.cycle,
        symbol: request.primary.clone(),
        stats,
    });

    let spec = match &request.compare {
        None => build_single_spec(&series_a, request.primary.as_str()),
        Some(compare) => {
            let series_b = source.fetch_series(compare, window).await?;
            build_compare_spec(&series_a, &series_b, request.primary.as_str(), compare.as_str())
        }
    };
    let _ = tx.send(AppEvent::ChartReady {
        cycle: request.cycle,
        spec,
    });
    Ok(())
}

/// One fetch-and-render pass. Always ends with `CycleFinished`.
pub async fn run_cycle<S: MarketData>(source: &S, request: RenderRequest, tx: &UnboundedSender<AppEvent>) {
    tracing::info!(
        cycle = request.cycle,
        trigger = ?request.trigger,
        primary = %request.primary,
        compare = ?request.compare.as_ref().map(Symbol::as_str),
        days = request.window_days,
        "render cycle started"
    );

    if let Err(error) = fetch_and_draw(source, &request, tx).await {
        tracing::error!(cycle = request.cycle, error = %error, "render cycle failed");
        let _ = tx.send(AppEvent::CycleFailed {
            cycle: request.cycle,
            error,
        });
    }
    let _ = tx.send(AppEvent::CycleFinished { cycle: request.cycle });
}

/// Spawns background work for the UI loop. Cycles are never cancelled or
/// coalesced, so overlapping cycles race and the last chart written wins.
pub struct Dispatcher<S> {
    source: Arc<S>,
    tx: UnboundedSender<AppEvent>,
}

impl<S: MarketData> Dispatcher<S> {
    pub fn new(source: Arc<S>, tx: UnboundedSender<AppEvent>) -> Self {
        Self { source, tx }
    }

    pub fn spawn_symbol_load(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            load_symbols(source.as_ref(), &tx).await;
        });
    }

    pub fn spawn_cycle(&self, request: RenderRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            run_cycle(source.as_ref(), request, &tx).await;
        });
    }
}
