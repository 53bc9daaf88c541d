//! Fixed outbound link templates, parameterized by the bare ticker.
//!
//! Connectors use these for their fallback payloads and the consolidator
//! uses them to build the `links` map of a [`crate::ConsolidatedQuote`].

use std::collections::BTreeMap;

use crate::ticker::Ticker;

/// Status Invest site root.
pub const STATUS_INVEST_SITE: &str = "https://www.statusinvest.com.br";
/// Investidor10 site root.
pub const INVESTIDOR10_SITE: &str = "https://investidor10.com.br";
/// Yahoo Finance site root.
pub const YAHOO_SITE: &str = "https://finance.yahoo.com";

/// Yahoo Finance quote page (market-qualified form).
#[must_use]
pub fn yahoo_quote(ticker: &Ticker) -> String {
    format!("{YAHOO_SITE}/quote/{}", ticker.qualified())
}

/// Status Invest stock page.
#[must_use]
pub fn status_invest_stock(ticker: &Ticker) -> String {
    format!("{STATUS_INVEST_SITE}/acoes/{}", ticker.bare())
}

/// Status Invest fund (FII) page.
#[must_use]
pub fn status_invest_fund(ticker: &Ticker) -> String {
    format!("{STATUS_INVEST_SITE}/fiis/{}/", ticker.bare())
}

/// Investidor10 stock page.
#[must_use]
pub fn investidor10_stock(ticker: &Ticker) -> String {
    format!("{INVESTIDOR10_SITE}/acoes/{}/", ticker.bare())
}

/// Investidor10 fund (FII) page.
#[must_use]
pub fn investidor10_fund(ticker: &Ticker) -> String {
    format!("{INVESTIDOR10_SITE}/fiis/{}/", ticker.bare())
}

/// The full outbound link map for a consolidated quote.
#[must_use]
pub fn reference_links(ticker: &Ticker) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("yahoo".to_string(), yahoo_quote(ticker)),
        ("status_invest".to_string(), status_invest_stock(ticker)),
        ("investidor10".to_string(), investidor10_stock(ticker)),
    ])
}
