//! Wire shapes of the Yahoo Finance quote and search endpoints.
//!
//! Yahoo reports `trailingAnnualDividendYield` as a fraction already, so no
//! unit conversion happens here.

use serde::Deserialize;

use cotacao_core::{ProviderQuote, SearchHit, Ticker, links};

use crate::YahooConnector;

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    pub quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteResponse {
    #[serde(default)]
    pub result: Vec<RawQuote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawQuote {
    pub regular_market_price: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    pub currency: Option<String>,
    pub market_cap: Option<f64>,
    pub long_name: Option<String>,
}

impl RawQuote {
    pub(crate) fn into_quote(self, ticker: &Ticker) -> ProviderQuote {
        ProviderQuote {
            source: YahooConnector::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            price: self.regular_market_price,
            change_percent: self.regular_market_change_percent,
            dividend_yield: self.trailing_annual_dividend_yield,
            currency: self.currency,
            market_cap: self.market_cap,
            name: self.long_name,
            link: Some(links::yahoo_quote(ticker)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub quotes: Vec<RawSearchEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSearchEntry {
    pub symbol: Option<String>,
    pub longname: Option<String>,
    pub quote_type: Option<String>,
}

impl RawSearchEntry {
    /// Yahoo reports market-qualified symbols; the `.SA` suffix is stripped
    /// so hits dedup against the bare-ticker providers.
    pub(crate) fn into_hit(self) -> Option<SearchHit> {
        let symbol = self.symbol?;
        let bare = symbol
            .strip_suffix(".SA")
            .unwrap_or(symbol.as_str())
            .to_string();
        let link = format!("{}/quote/{symbol}", links::YAHOO_SITE);
        Some(SearchHit {
            ticker: bare,
            name: self.longname,
            kind: self.quote_type,
            link: Some(link),
        })
    }
}
