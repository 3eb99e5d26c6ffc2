pub mod client;
pub mod error;
pub mod records;

pub use client::{DashboardClient, DEFAULT_BASE_URL};
pub use error::{SourceError, SourceResult};
pub use records::{PricePoint, Symbol, SummaryStats};

use std::future::Future;

/// Read access to the market data backend.
pub trait MarketData: Send + Sync + 'static {
    fn list_symbols(&self) -> impl Future<Output = SourceResult<Vec<Symbol>>> + Send;

    /// Trailing `window_days` points of the symbol's history, oldest first.
    fn fetch_series(
        &self,
        symbol: &Symbol,
        window_days: usize,
    ) -> impl Future<Output = SourceResult<Vec<PricePoint>>> + Send;

    fn fetch_summary(&self, symbol: &Symbol) -> impl Future<Output = SourceResult<SummaryStats>> + Send;
}
