//! cotacao-yahoo
//!
//! Connector for the Yahoo Finance public API. Serves market quotes (price,
//! intraday change, currency, market cap) and instrument search. It carries
//! no fundamentals and no FII capability; the fund consolidator never routes
//! to it.
#![warn(missing_docs)]

mod model;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use cotacao_core::connector::{Provider, QuoteProvider, SEARCH_LIMIT, SearchProvider};
use cotacao_core::{Fetch, ProviderRef, QuoteFetch, SearchHit, Ticker, links};
use cotacao_types::{CotacaoError, ProviderKey, keys};

use model::{QuoteEnvelope, RawSearchEntry, SearchEnvelope};

const UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connector backed by the Yahoo Finance public API.
pub struct YahooConnector {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl YahooConnector {
    /// Static name, matching [`keys::YAHOO`].
    pub const NAME: &'static str = "cotacao-yahoo";
    /// Static provider key for priority configuration.
    pub const KEY: ProviderKey = keys::YAHOO;

    /// Default upstream API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com";

    /// Build with a fresh HTTP client against the production API.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> YahooBuilder {
        YahooBuilder::default()
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

    fn reference(ticker: &Ticker) -> ProviderRef {
        ProviderRef {
            source: Self::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            link: links::yahoo_quote(ticker),
            note: Some("Detailed data available on Yahoo Finance".to_string()),
        }
    }
}

/// Builder for [`YahooConnector`]; the overrides exist for tests that point
/// the connector at a local mock server.
#[derive(Default)]
pub struct YahooBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl YahooBuilder {
    /// Override the upstream API root.
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
    pub fn build(self) -> YahooConnector {
        YahooConnector {
            http: self.client.unwrap_or_default(),
            base_url: self
                .base_url
                .unwrap_or_else(|| YahooConnector::DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}

#[async_trait]
impl QuoteProvider for YahooConnector {
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<QuoteFetch, CotacaoError> {
        let url = format!("{}/v7/finance/quote", self.base_url);
        let resp = self
            .get(&url)
            .query(&[("symbols", ticker.qualified())])
            .send()
            .await
            .map_err(|e| Self::transport_err(&e))?;
        let status = resp.status();
        if !status.is_success() {
            debug!(ticker = ticker.bare(), status = %status, "degraded quote response");
            return Ok(Fetch::Reference(Self::reference(ticker)));
        }
        match resp.json::<QuoteEnvelope>().await {
            Ok(env) => match env.quote_response.result.into_iter().next() {
                Some(raw) => Ok(Fetch::Data(raw.into_quote(ticker))),
                None => Ok(Fetch::Empty),
            },
            Err(e) => {
                debug!(ticker = ticker.bare(), error = %e, "unparseable quote payload");
                Ok(Fetch::Reference(Self::reference(ticker)))
            }
        }
    }
}

#[async_trait]
impl SearchProvider for YahooConnector {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError> {
        let url = format!("{}/v1/finance/search", self.base_url);
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
        let env = match resp.json::<SearchEnvelope>().await {
            Ok(v) => v,
            Err(e) => {
                debug!(query, error = %e, "unparseable search payload");
                return Ok(Vec::new());
            }
        };
        Ok(env
            .quotes
            .into_iter()
            .filter_map(RawSearchEntry::into_hit)
            .take(SEARCH_LIMIT)
            .collect())
    }
}

impl Provider for YahooConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self)
    }
}
