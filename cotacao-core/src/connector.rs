//! Provider contracts.
//!
//! Each upstream source is wrapped by a stateless connector implementing the
//! focused role traits below plus the base [`Provider`] capability directory.
//! A connector never lets an upstream failure escape as anything other than
//! a tagged `Err`: degraded (non-success / malformed) responses collapse into
//! [`crate::Fetch::Reference`] outcomes, and the orchestrator contains the
//! remaining transport errors.

use async_trait::async_trait;

use crate::ticker::Ticker;
use crate::types::{FundFetch, QuoteFetch, RecommendationEntry, SearchHit};
pub use cotacao_types::ProviderKey;
use cotacao_types::CotacaoError;

/// Maximum number of entries a single provider contributes to a search.
pub const SEARCH_LIMIT: usize = 10;

/// Focused role trait for providers that serve equity quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch normalized quote attributes for the given bare ticker.
    async fn fetch_quote(&self, ticker: &Ticker) -> Result<QuoteFetch, CotacaoError>;
}

/// Focused role trait for providers that can search instruments.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Free-text search, bounded to [`SEARCH_LIMIT`] entries per provider.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError>;
}

/// Focused role trait for providers that serve real-estate fund metrics.
#[async_trait]
pub trait FundProvider: Send + Sync {
    /// Fetch normalized FII metrics for the given bare ticker.
    async fn fetch_fund(&self, ticker: &Ticker) -> Result<FundFetch, CotacaoError>;
}

/// Focused role trait for providers that serve analyst recommendations.
#[async_trait]
pub trait RecommendationsProvider: Send + Sync {
    /// Fetch recommendation rows for the given bare ticker.
    async fn recommendations(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RecommendationEntry>, CotacaoError>;
}

/// Main trait implemented by provider crates. Exposes capability discovery.
pub trait Provider: Send + Sync {
    /// A stable identifier for priority lists (e.g., "cotacao-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise quote capability by returning a usable trait object
    /// reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }

    /// If implemented, returns a trait object for instrument search.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }

    /// If implemented, returns a trait object for real-estate fund metrics.
    ///
    /// The generic market-data provider deliberately leaves this `None`; the
    /// fund consolidator only ever fans out to providers that advertise it.
    fn as_fund_provider(&self) -> Option<&dyn FundProvider> {
        None
    }

    /// If implemented, returns a trait object for analyst recommendations.
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        None
    }
}
