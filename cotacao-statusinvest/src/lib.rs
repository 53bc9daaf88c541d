//! cotacao-statusinvest
//!
//! Connector for the Status Invest fundamentals API. Serves quotes (ratio
//! heavy, percentages normalized to fractions), instrument search, FII
//! metrics, and analyst recommendation rows.
#![warn(missing_docs)]

mod model;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use cotacao_core::connector::{
    FundProvider, Provider, QuoteProvider, RecommendationsProvider, SEARCH_LIMIT, SearchProvider,
};
use cotacao_core::{Fetch, FundFetch, ProviderRef, QuoteFetch, RecommendationEntry, SearchHit,
    Ticker, links};
use cotacao_types::{CotacaoError, ProviderKey, keys};

use model::{RawFund, RawQuote, RawRecommendation, RawSearchEntry};

const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connector backed by the Status Invest fundamentals API.
pub struct StatusInvestConnector {
    http: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl StatusInvestConnector {
    /// Static name, matching [`keys::STATUS_INVEST`].
    pub const NAME: &'static str = "cotacao-statusinvest";
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = keys::STATUS_INVEST;

    /// Default upstream API root.
    pub const DEFAULT_API_URL: &'static str = "https://api.statusinvest.com.br";

    /// Build with a fresh HTTP client against the production API.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> StatusInvestBuilder {
        StatusInvestBuilder::default()
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .timeout(self.timeout)
            .header(USER_AGENT, UA)
            .header(ACCEPT, "application/json")
    }

    fn transport_err(e: &reqwest::Error) -> CotacaoError {
        CotacaoError::provider(Self::NAME, e.to_string())
    }

    fn reference(ticker: &Ticker, link: String) -> ProviderRef {
        ProviderRef {
            source: Self::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            link,
            note: Some("Detailed data available on Status Invest".to_string()),
        }
    }
}

/// Builder for [`StatusInvestConnector`]; the overrides exist for tests that
/// point the connector at a local mock server.
#[derive(Default)]
pub struct StatusInvestBuilder {
    api_url: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl StatusInvestBuilder {
    /// Override the upstream API root.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a pre-configured HTTP client.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Finalize the connector.
    #[must_use]
    pub fn build(self) -> StatusInvestConnector {
        StatusInvestConnector {
            http: self.client.unwrap_or_default(),
            api_url: self
                .api_url
                .unwrap_or_else(|| StatusInvestConnector::DEFAULT_API_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}

#[async_trait]
impl QuoteProvider for StatusInvestConnector {
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<QuoteFetch, CotacaoError> {
        let url = format!("{}/quote/{}", self.api_url, ticker.bare());
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_err(&e))?;
        let status = resp.status();
        if !status.is_success() {
            debug!(ticker = ticker.bare(), status = %status, "degraded quote response");
            return Ok(Fetch::Reference(Self::reference(
                ticker,
                links::status_invest_stock(ticker),
            )));
        }
        match resp.json::<RawQuote>().await {
            Ok(raw) => Ok(Fetch::Data(raw.into_quote(ticker))),
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable quote payload");
                Ok(Fetch::Reference(Self::reference(
                    ticker,
                    links::status_invest_stock(ticker),
                )))
            }
        }
    }
}

#[async_trait]
impl SearchProvider for StatusInvestConnector {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError> {
        let url = format!("{}/search", self.api_url);
        let resp = self
            .get(&url)
            .query(&[("q", query), ("type", "stock")])
            .send()
            .await
            .map_err(|e| Self::transport_err(&e))?;
        if !resp.status().is_success() {
            debug!(query, status = %resp.status(), "degraded search response");
            return Ok(Vec::new());
        }
        let entries = match resp.json::<Vec<RawSearchEntry>>().await {
            Ok(v) => v,
            Err(e) => {
                debug!(query, error = %e, "unparseable search payload");
                return Ok(Vec::new());
            }
        };
        Ok(entries
            .into_iter()
            .filter_map(RawSearchEntry::into_hit)
            .take(SEARCH_LIMIT)
            .collect())
    }
}

#[async_trait]
impl FundProvider for StatusInvestConnector {
    async fn fetch_fund(&self, ticker: &Ticker) -> Result<FundFetch, CotacaoError> {
        let url = format!("{}/fii/{}", self.api_url, ticker.bare());
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_err(&e))?;
        let status = resp.status();
        if !status.is_success() {
            debug!(ticker = ticker.bare(), status = %status, "degraded fund response");
            return Ok(Fetch::Reference(Self::reference(
                ticker,
                links::status_invest_fund(ticker),
            )));
        }
        match resp.json::<RawFund>().await {
            Ok(raw) => Ok(Fetch::Data(raw.into_snapshot(ticker))),
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable fund payload");
                Ok(Fetch::Reference(Self::reference(
                    ticker,
                    links::status_invest_fund(ticker),
                )))
            }
        }
    }
}

#[async_trait]
impl RecommendationsProvider for StatusInvestConnector {
    async fn recommendations(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RecommendationEntry>, CotacaoError> {
        let url = format!("{}/quote/{}/recommendations", self.api_url, ticker.bare());
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_err(&e))?;
        if !resp.status().is_success() {
            return Ok(Vec::new());
        }
        let rows = match resp.json::<Vec<RawRecommendation>>().await {
            Ok(v) => v,
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable recommendations payload");
                return Ok(Vec::new());
            }
        };
        Ok(rows.into_iter().map(RawRecommendation::into_entry).collect())
    }
}

impl Provider for StatusInvestConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Status Invest"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self)
    }

    fn as_fund_provider(&self) -> Option<&dyn FundProvider> {
        Some(self)
    }

    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        Some(self)
    }
}
