//! cotacao-investidor10
//!
//! Connector for the Investidor10 fundamentals API. Serves quotes carrying
//! the consensus recommendation and rating grade, instrument search, and FII
//! metrics.
#![warn(missing_docs)]

mod model;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use cotacao_core::connector::{
    FundProvider, Provider, QuoteProvider, SEARCH_LIMIT, SearchProvider,
};
use cotacao_core::{Fetch, FundFetch, ProviderRef, QuoteFetch, SearchHit, Ticker, links};
use cotacao_types::{CotacaoError, ProviderKey, keys};

use model::{RawFund, RawQuote, RawSearchEntry};

const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connector backed by the Investidor10 fundamentals API.
pub struct Investidor10Connector {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Investidor10Connector {
    /// Static name, matching [`keys::INVESTIDOR10`].
    pub const NAME: &'static str = "cotacao-investidor10";
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = keys::INVESTIDOR10;

    /// Build with a fresh HTTP client against the production site.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> Investidor10Builder {
        Investidor10Builder::default()
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
            note: Some("Detailed data available on Investidor10".to_string()),
        }
    }
}

/// Builder for [`Investidor10Connector`]; the overrides exist for tests that
/// point the connector at a local mock server.
#[derive(Default)]
pub struct Investidor10Builder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl Investidor10Builder {
    /// Override the upstream site root.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
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
    pub fn build(self) -> Investidor10Connector {
        Investidor10Connector {
            http: self.client.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| links::INVESTIDOR10_SITE.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}

#[async_trait]
impl QuoteProvider for Investidor10Connector {
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<QuoteFetch, CotacaoError> {
        let url = format!("{}/api/quote/{}", self.base_url, ticker.bare());
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
                links::investidor10_stock(ticker),
            )));
        }
        match resp.json::<RawQuote>().await {
            Ok(raw) => Ok(Fetch::Data(raw.into_quote(ticker))),
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable quote payload");
                Ok(Fetch::Reference(Self::reference(
                    ticker,
                    links::investidor10_stock(ticker),
                )))
            }
        }
    }
}

#[async_trait]
impl SearchProvider for Investidor10Connector {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError> {
        let url = format!("{}/api/search", self.base_url);
        let resp = self
            .get(&url)
            .query(&[("q", query)])
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
impl FundProvider for Investidor10Connector {
    async fn fetch_fund(&self, ticker: &Ticker) -> Result<FundFetch, CotacaoError> {
        let url = format!("{}/api/fiis/{}", self.base_url, ticker.bare());
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
                links::investidor10_fund(ticker),
            )));
        }
        match resp.json::<RawFund>().await {
            Ok(raw) => Ok(Fetch::Data(raw.into_snapshot(ticker))),
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable fund payload");
                Ok(Fetch::Reference(Self::reference(
                    ticker,
                    links::investidor10_fund(ticker),
                )))
            }
        }
    }
}

impl Provider for Investidor10Connector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Investidor10"
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
}
