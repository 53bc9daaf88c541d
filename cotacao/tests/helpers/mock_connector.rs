#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use cotacao_core::connector::{
    FundProvider, Provider, QuoteProvider, RecommendationsProvider, SearchProvider,
};
use cotacao_core::{
    CotacaoError, FundFetch, QuoteFetch, RecommendationEntry, SearchHit, Ticker,
};

/// Simple in-memory provider used by integration tests.
/// Capabilities are advertised only when the matching closure is set, so a
/// mock configured with `quote_fn` alone never shows up in fund fan-outs.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,

    pub quote_fn: Option<Arc<dyn Fn(&Ticker) -> Result<QuoteFetch, CotacaoError> + Send + Sync>>,
    pub search_fn: Option<Arc<dyn Fn(&str) -> Result<Vec<SearchHit>, CotacaoError> + Send + Sync>>,
    pub fund_fn: Option<Arc<dyn Fn(&Ticker) -> Result<FundFetch, CotacaoError> + Send + Sync>>,
    pub recommendations_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<Vec<RecommendationEntry>, CotacaoError> + Send + Sync>>,

    // Per-capability call counters for routing assertions.
    pub quote_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub fund_calls: AtomicUsize,
    pub recommendations_calls: AtomicUsize,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            quote_fn: None,
            search_fn: None,
            fund_fn: None,
            recommendations_fn: None,
            quote_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            fund_calls: AtomicUsize::new(0),
            recommendations_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn fetch_quote(&self, t: &Ticker) -> Result<QuoteFetch, CotacaoError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.quote_fn {
            Some(f) => (f)(t),
            None => Err(CotacaoError::unsupported("quote")),
        }
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CotacaoError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.search_fn {
            Some(f) => (f)(query),
            None => Err(CotacaoError::unsupported("search")),
        }
    }
}

#[async_trait]
impl FundProvider for MockConnector {
    async fn fetch_fund(&self, t: &Ticker) -> Result<FundFetch, CotacaoError> {
        self.fund_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.fund_fn {
            Some(f) => (f)(t),
            None => Err(CotacaoError::unsupported("fund")),
        }
    }
}

#[async_trait]
impl RecommendationsProvider for MockConnector {
    async fn recommendations(&self, t: &Ticker) -> Result<Vec<RecommendationEntry>, CotacaoError> {
        self.recommendations_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.recommendations_fn {
            Some(f) => (f)(t),
            None => Err(CotacaoError::unsupported("recommendations")),
        }
    }
}

impl Provider for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.quote_fn.as_ref().map(|_| self as &dyn QuoteProvider)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        self.search_fn.as_ref().map(|_| self as &dyn SearchProvider)
    }

    fn as_fund_provider(&self) -> Option<&dyn FundProvider> {
        self.fund_fn.as_ref().map(|_| self as &dyn FundProvider)
    }

    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        self.recommendations_fn
            .as_ref()
            .map(|_| self as &dyn RecommendationsProvider)
    }
}
