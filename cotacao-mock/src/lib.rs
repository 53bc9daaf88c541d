//! Mock provider for CI-safe tests and examples. Serves deterministic data
//! from static fixtures; the magic tickers `FAIL` and `TIMEOUT` force a
//! provider error and a slow response respectively.

use async_trait::async_trait;

use cotacao_core::connector::{
    FundProvider, Provider, QuoteProvider, RecommendationsProvider, SearchProvider,
};
use cotacao_core::{Fetch, FundFetch, QuoteFetch, RecommendationEntry, SearchHit, Ticker};
use cotacao_types::CotacaoError;

mod fixtures;

/// Deterministic fixture-backed provider implementing every capability.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static name of the mock provider.
    pub const NAME: &'static str = "cotacao-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(bare: &str, capability: &'static str) -> Result<(), CotacaoError> {
        match bare {
            "FAIL" => Err(CotacaoError::provider(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Short stall; the orchestrator may time out depending on config.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<QuoteFetch, CotacaoError> {
        let bare = ticker.bare();
        Self::maybe_fail_or_stall(bare, "quote").await?;
        Ok(match fixtures::quotes::by_ticker(bare) {
            Some(q) => Fetch::Data(q),
            None => Fetch::Empty,
        })
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError> {
        Ok(fixtures::search::search(query))
    }
}

#[async_trait]
impl FundProvider for MockConnector {
    async fn fetch_fund(&self, ticker: &Ticker) -> Result<FundFetch, CotacaoError> {
        let bare = ticker.bare();
        Self::maybe_fail_or_stall(bare, "fund").await?;
        Ok(match fixtures::funds::by_ticker(bare) {
            Some(s) => Fetch::Data(s),
            None => Fetch::Empty,
        })
    }
}

#[async_trait]
impl RecommendationsProvider for MockConnector {
    async fn recommendations(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RecommendationEntry>, CotacaoError> {
        let bare = ticker.bare();
        Self::maybe_fail_or_stall(bare, "recommendations").await?;
        Ok(fixtures::recommendations::by_ticker(bare))
    }
}

impl Provider for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
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
