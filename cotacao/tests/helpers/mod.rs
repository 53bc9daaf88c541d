// Re-export helpers so tests can `use crate::helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use std::sync::Arc;

use cotacao_core::types::FII_TYPE;
use cotacao_core::{
    Fetch, FundFetch, FundSnapshot, Provider, ProviderQuote, QuoteFetch, SearchHit, Ticker,
};

/// Common tickers used across tests.
pub const PETR4: &str = "PETR4";
pub const MXRF11: &str = "MXRF11";

/// Parse a ticker with infallible expectations.
pub fn ticker(s: &str) -> Ticker {
    Ticker::parse(s).expect("valid static test ticker")
}

/// A `Data` quote outcome with only the fields under test populated.
pub fn quote_data(source: &str, price: Option<f64>, dy: Option<f64>) -> QuoteFetch {
    Fetch::Data(ProviderQuote {
        source: source.to_string(),
        ticker: PETR4.to_string(),
        price,
        dividend_yield: dy,
        ..Default::default()
    })
}

/// A `Data` fund outcome with only price and yield populated.
pub fn fund_data(source: &str, price: f64, dy: f64) -> FundFetch {
    Fetch::Data(FundSnapshot {
        source: source.to_string(),
        ticker: MXRF11.to_string(),
        asset_type: FII_TYPE.to_string(),
        price: Some(price),
        dividend_yield: Some(dy),
        ..Default::default()
    })
}

/// A minimal search hit.
pub fn hit(ticker: &str, name: &str) -> SearchHit {
    SearchHit {
        ticker: ticker.to_string(),
        name: Some(name.to_string()),
        kind: Some("stock".to_string()),
        link: None,
    }
}

/// Quote-only mock serving a fixed price.
pub fn m_quote(name: &'static str, price: Option<f64>) -> Arc<dyn Provider> {
    let q = quote_data(name, price, None);
    Arc::new(MockConnector {
        name,
        quote_fn: Some(Arc::new(move |_| Ok(q.clone()))),
        ..Default::default()
    })
}

/// Quote-only mock whose every call yields `Empty`.
pub fn m_quote_empty(name: &'static str) -> Arc<dyn Provider> {
    Arc::new(MockConnector {
        name,
        quote_fn: Some(Arc::new(|_| Ok(Fetch::Empty))),
        ..Default::default()
    })
}

/// Search-only mock serving a fixed hit list.
pub fn m_search(name: &'static str, hits: Vec<SearchHit>) -> Arc<dyn Provider> {
    Arc::new(MockConnector {
        name,
        search_fn: Some(Arc::new(move |_| Ok(hits.clone()))),
        ..Default::default()
    })
}
