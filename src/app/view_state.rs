use crate::api::Symbol;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    #[default]
    Single,
    Compare,
}

impl ChartMode {
    pub fn toggle(&mut self) {
        *self = match self {
            ChartMode::Single => ChartMode::Compare,
            ChartMode::Compare => ChartMode::Single,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Single => "Single",
            ChartMode::Compare => "Compare",
        }
    }
}

/// Parse a window length, falling back to 30 days for anything that is not
/// a positive integer.
pub fn parse_window_days(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(days) if days > 0 => days,
        _ => DEFAULT_WINDOW_DAYS,
    }
}

/// The user's current selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub primary: Option<Symbol>,
    pub compare: Option<Symbol>,
    pub mode: ChartMode,
    window_days: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            primary: None,
            compare: None,
            mode: ChartMode::Single,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl ViewState {
    pub fn new(window_days: u32) -> Self {
        let mut state = Self::default();
        state.set_window_days(window_days);
        state
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn set_window_days(&mut self, days: u32) {
        self.window_days = if days == 0 { DEFAULT_WINDOW_DAYS } else { days };
    }

    /// Compare without a second symbol renders as Single.
    pub fn effective_mode(&self) -> ChartMode {
        match (self.mode, &self.compare) {
            (ChartMode::Compare, Some(_)) => ChartMode::Compare,
            _ => ChartMode::Single,
        }
    }

    /// Step the window through `presets`. An unknown current value snaps to
    /// the nearest preset in the stepping direction.
    pub fn step_window(&mut self, presets: &[u32], forward: bool) {
        if presets.is_empty() {
            return;
        }
        let current = self.window_days;
        let next = if forward {
            presets
                .iter()
                .copied()
                .find(|&p| p > current)
                .unwrap_or(presets[presets.len() - 1])
        } else {
            presets
                .iter()
                .rev()
                .copied()
                .find(|&p| p < current)
                .unwrap_or(presets[0])
        };
        self.set_window_days(next);
    }
}

/// Cycle a selection through `[none, symbols...]`.
pub fn cycle_symbol(current: Option<&Symbol>, symbols: &[Symbol], forward: bool) -> Option<Symbol> {
    if symbols.is_empty() {
        return None;
    }
    // Slot 0 is "none", slot i + 1 is symbols[i].
    let slots = symbols.len() + 1;
    let slot = current
        .and_then(|c| symbols.iter().position(|s| s == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };
    if next == 0 {
        None
    } else {
        Some(symbols[next - 1].clone())
    }
}
