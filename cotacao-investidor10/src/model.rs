//! Wire shapes of the Investidor10 API and their normalization.
//!
//! `dividendYield` arrives as a percentage and is converted to a fraction
//! here; `roe` and `netMargin` follow the same convention.

use serde::Deserialize;

use cotacao_core::types::FII_TYPE;
use cotacao_core::{FundSnapshot, ProviderQuote, Ticker, links};

use crate::Investidor10Connector;

fn pct(v: Option<f64>) -> Option<f64> {
    v.map(|p| p / 100.0)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawQuote {
    pub price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub roe: Option<f64>,
    pub net_margin: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub growth_rate: Option<f64>,
    pub recommendation: Option<String>,
    pub rating: Option<String>,
    pub sector: Option<String>,
}

impl RawQuote {
    pub(crate) fn into_quote(self, ticker: &Ticker) -> ProviderQuote {
        ProviderQuote {
            source: Investidor10Connector::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            price: self.price,
            pe_ratio: self.pe_ratio,
            dividend_yield: pct(self.dividend_yield),
            roe: pct(self.roe),
            net_margin: pct(self.net_margin),
            debt_ratio: self.debt_ratio,
            growth_rate: self.growth_rate,
            recommendation: self.recommendation,
            rating: self.rating,
            sector: self.sector,
            link: Some(links::investidor10_stock(ticker)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFund {
    pub price: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub pvp_ratio: Option<f64>,
    pub distribution: Option<f64>,
}

impl RawFund {
    pub(crate) fn into_snapshot(self, ticker: &Ticker) -> FundSnapshot {
        FundSnapshot {
            source: Investidor10Connector::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            asset_type: FII_TYPE.to_string(),
            price: self.price,
            dividend_yield: pct(self.dividend_yield),
            pvp_ratio: self.pvp_ratio,
            distribution: self.distribution,
            sector: None,
            link: Some(links::investidor10_fund(ticker)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSearchEntry {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RawSearchEntry {
    pub(crate) fn into_hit(self) -> Option<cotacao_core::SearchHit> {
        let ticker = self.symbol?;
        let link = format!("{}/acoes/{}/", links::INVESTIDOR10_SITE, ticker);
        Some(cotacao_core::SearchHit {
            ticker,
            name: self.name,
            kind: self.kind,
            link: Some(link),
        })
    }
}
