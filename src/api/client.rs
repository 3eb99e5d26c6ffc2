use super::error::{SourceError, SourceResult};
use super::records::{self, PricePoint, Symbol, SummaryStats};
use super::MarketData;
use reqwest::{Client, Url};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9000";

/// HTTP client for the dashboard backend (`/companies`, `/data`, `/summary`).
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL {}: {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Base URL {} cannot carry a path", base_url);
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_text(&self, url: Url) -> SourceResult<String> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Unavailable(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

impl MarketData for DashboardClient {
    async fn list_symbols(&self) -> SourceResult<Vec<Symbol>> {
        let body = self.get_text(self.endpoint(&["companies"])).await?;
        records::parse_companies(&body)
    }

    async fn fetch_series(&self, symbol: &Symbol, window_days: usize) -> SourceResult<Vec<PricePoint>> {
        let body = self
            .get_text(self.endpoint(&["data", symbol.as_str()]))
            .await?;
        let points = records::parse_series(&body)?;
        Ok(records::trailing(points, window_days))
    }

    async fn fetch_summary(&self, symbol: &Symbol) -> SourceResult<SummaryStats> {
        let body = self
            .get_text(self.endpoint(&["summary", symbol.as_str()]))
            .await?;
        records::parse_summary(&body)
    }
}
