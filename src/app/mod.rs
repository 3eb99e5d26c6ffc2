mod export;
pub mod orchestrator;
pub mod view_state;

pub use orchestrator::{AppEvent, Dispatcher, RenderRequest, Trigger};
pub use view_state::{ChartMode, ViewState};

use crate::api::{Symbol, SummaryStats};
use crate::chart::{ChartHandle, Renderer};
use crate::config::Config;
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

/// Control bar entries, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Primary,
    Compare,
    Mode,
    Range,
}

impl Control {
    const ORDER: [Control; 4] = [Control::Primary, Control::Compare, Control::Mode, Control::Range];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn next(self) -> Control {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Control {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    pub config: Config,
    pub symbols: Vec<Symbol>,
    pub view: ViewState,
    pub summary: Option<SummaryStats>,
    pub summary_symbol: Option<Symbol>,
    pub renderer: Renderer,
    pub loading: bool,
    pub input_mode: InputMode,
    pub focus: Control,
    pub status_message: Option<String>,
    pub last_updated: Option<String>,
    next_cycle: u64,
    outbox: Vec<RenderRequest>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let view = ViewState::new(config.default_window_days);
        Self {
            config,
            symbols: Vec::new(),
            view,
            summary: None,
            summary_symbol: None,
            renderer: Renderer::new(),
            loading: false,
            input_mode: InputMode::Normal,
            focus: Control::Primary,
            status_message: None,
            last_updated: None,
            next_cycle: 0,
            outbox: Vec::new(),
        }
    }

    /// The symbol list is being fetched.
    pub fn begin_initial_load(&mut self) {
        self.loading = true;
    }

    /// Queue a render cycle for the current view. Without a primary symbol
    /// this does nothing, and the loading indicator stays as it was.
    pub fn request_render(&mut self, trigger: Trigger) {
        let Some(request) = RenderRequest::from_view(self.next_cycle + 1, trigger, &self.view) else {
            tracing::debug!(?trigger, "no primary symbol selected, skipping render");
            return;
        };
        self.next_cycle = request.cycle;
        self.loading = true;
        self.outbox.push(request);
    }

    /// Drain queued render requests for the dispatcher.
    pub fn take_requests(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SymbolsLoaded(symbols) => {
                self.loading = false;
                self.symbols = symbols;
                if self.symbols.is_empty() {
                    self.status_message = Some("No companies available".to_string());
                }
                if self.view.primary.is_none() {
                    self.view.primary = self.symbols.first().cloned();
                }
                self.request_render(Trigger::InitialLoad);
            }
            AppEvent::SummaryLoaded { symbol, stats, .. } => {
                self.summary = Some(stats);
                self.summary_symbol = Some(symbol);
            }
            AppEvent::ChartReady { cycle, spec } => {
                let chart = self.renderer.draw(spec).id();
                tracing::debug!(cycle, chart, "chart updated");
                self.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
                self.status_message = None;
            }
            AppEvent::CycleFailed { error, .. } => {
                self.status_message = Some(format!("Error: {}", error));
            }
            AppEvent::CycleFinished { .. } => {
                self.loading = false;
            }
        }
    }

    pub fn chart(&self) -> Option<&ChartHandle> {
        self.renderer.current()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Left/right on the focused control.
    pub fn change_focused(&mut self, forward: bool) {
        match self.focus {
            Control::Primary => self.cycle_primary(forward),
            Control::Compare => self.cycle_compare(forward),
            Control::Mode => self.toggle_mode(),
            Control::Range => self.step_range(forward),
        }
    }

    pub fn cycle_primary(&mut self, forward: bool) {
        self.view.primary = view_state::cycle_symbol(self.view.primary.as_ref(), &self.symbols, forward);
        self.request_render(Trigger::PrimaryChanged);
    }

    pub fn cycle_compare(&mut self, forward: bool) {
        self.view.compare = view_state::cycle_symbol(self.view.compare.as_ref(), &self.symbols, forward);
        self.request_render(Trigger::CompareChanged);
    }

    pub fn toggle_mode(&mut self) {
        self.view.mode.toggle();
        self.request_render(Trigger::ModeChanged);
    }

    pub fn step_range(&mut self, forward: bool) {
        let before = self.view.window_days();
        self.view.step_window(&self.config.range_presets, forward);
        if self.view.window_days() != before {
            self.request_render(Trigger::RangeChanged);
        }
    }

    pub fn refresh(&mut self) {
        self.request_render(Trigger::Refresh);
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
