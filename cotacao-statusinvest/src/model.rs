//! Wire shapes of the Status Invest API and their normalization.
//!
//! Ratio-like metrics (dy, roe, roa, roic, net margin) arrive as
//! percentages and are converted to fractions at this boundary, so nothing
//! downstream ever sees mixed units.

use serde::Deserialize;

use cotacao_core::types::FII_TYPE;
use cotacao_core::{FundSnapshot, ProviderQuote, RecommendationEntry, Ticker, links};

use crate::StatusInvestConnector;

fn pct(v: Option<f64>) -> Option<f64> {
    v.map(|p| p / 100.0)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawQuote {
    pub price: Option<f64>,
    pub last_price: Option<f64>,
    pub pe: Option<f64>,
    pub pb: Option<f64>,
    pub dy: Option<f64>,
    pub roa: Option<f64>,
    pub roe: Option<f64>,
    pub net_margin: Option<f64>,
    pub roic: Option<f64>,
    pub ev_ebitda: Option<f64>,
    pub sector: Option<String>,
    pub subsector: Option<String>,
}

impl RawQuote {
    pub(crate) fn into_quote(self, ticker: &Ticker) -> ProviderQuote {
        ProviderQuote {
            source: StatusInvestConnector::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            price: self.price.or(self.last_price),
            dividend_yield: pct(self.dy),
            pe_ratio: self.pe,
            pb_ratio: self.pb,
            roe: pct(self.roe),
            roa: pct(self.roa),
            roic: pct(self.roic),
            net_margin: pct(self.net_margin),
            ev_ebitda: self.ev_ebitda,
            sector: self.sector,
            subsector: self.subsector,
            link: Some(links::status_invest_stock(ticker)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFund {
    pub price: Option<f64>,
    pub last_price: Option<f64>,
    pub dy: Option<f64>,
    pub pvp: Option<f64>,
    pub distribution: Option<f64>,
    pub sector: Option<String>,
}

impl RawFund {
    pub(crate) fn into_snapshot(self, ticker: &Ticker) -> FundSnapshot {
        FundSnapshot {
            source: StatusInvestConnector::NAME.to_string(),
            ticker: ticker.bare().to_string(),
            asset_type: FII_TYPE.to_string(),
            price: self.price.or(self.last_price),
            dividend_yield: pct(self.dy),
            pvp_ratio: self.pvp,
            distribution: self.distribution,
            sector: self.sector,
            link: Some(links::status_invest_fund(ticker)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSearchEntry {
    pub ticker: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RawSearchEntry {
    pub(crate) fn into_hit(self) -> Option<cotacao_core::SearchHit> {
        let ticker = self.ticker?;
        let link = format!("{}/acoes/{}", links::STATUS_INVEST_SITE, ticker);
        Some(cotacao_core::SearchHit {
            ticker,
            name: self.name,
            kind: self.kind,
            link: Some(link),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRecommendation {
    pub broker: Option<String>,
    pub rating: Option<String>,
    pub target_price: Option<f64>,
    pub updated_at: Option<String>,
}

impl RawRecommendation {
    pub(crate) fn into_entry(self) -> RecommendationEntry {
        RecommendationEntry {
            broker: self.broker,
            rating: self.rating,
            target_price: self.target_price,
            updated_at: self.updated_at,
        }
    }
}
