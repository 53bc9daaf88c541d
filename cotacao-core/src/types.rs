//! Normalized domain schemas and consolidated response shapes.
//!
//! Every provider maps its upstream payload into one of the explicit structs
//! below; absent fields are explicit `Option`s rather than missing keys, so
//! the merge step never inspects dynamically-shaped data.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ticker::Ticker;

/// Outcome of a single provider fetch.
///
/// A degraded upstream response (non-success status, schema drift) is data,
/// not an error: it collapses into [`Fetch::Reference`], which keeps the same
/// shape contract so the merge step never special-cases it. Transport
/// failures are the only thing surfaced as `Err` by the connectors, and the
/// orchestrator contains those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Fetch<T> {
    /// The provider returned a parseable payload.
    Data(T),
    /// The provider answered cleanly but knows nothing about the ticker.
    Empty,
    /// Link-only fallback: the source exists but served no structured data.
    Reference(ProviderRef),
}

impl<T> Fetch<T> {
    /// The structured payload, when present.
    pub fn as_data(&self) -> Option<&T> {
        match self {
            Self::Data(d) => Some(d),
            Self::Empty | Self::Reference(_) => None,
        }
    }

    /// True when the source had nothing for the ticker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for the link-only degraded outcome.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

/// Fetch outcome for equity quotes.
pub type QuoteFetch = Fetch<ProviderQuote>;
/// Fetch outcome for real-estate fund metrics.
pub type FundFetch = Fetch<FundSnapshot>;

/// Link-only fallback payload carrying just the source tag and a reference
/// link for manual follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRef {
    /// Provider that produced this fallback.
    pub source: String,
    /// Bare ticker the lookup was performed for.
    pub ticker: String,
    /// Outbound link to the provider's own page for the instrument.
    pub link: String,
    /// Optional human note, e.g. "detailed data available on ...".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Normalized per-provider quote attributes.
///
/// This is the union of the fields the three upstreams can report; each
/// connector fills what its source knows and leaves the rest `None`.
/// `dividend_yield` is always a fraction (0.08 = 8%): connectors that
/// receive percentages normalize at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuote {
    /// Provider that produced this payload.
    pub source: String,
    /// Bare ticker.
    pub ticker: String,
    /// Last traded price.
    pub price: Option<f64>,
    /// Intraday change, percent. Only the market-data provider reports it.
    pub change_percent: Option<f64>,
    /// Trailing dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Price / earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Price / book ratio.
    pub pb_ratio: Option<f64>,
    /// Return on equity as a fraction.
    pub roe: Option<f64>,
    /// Return on assets as a fraction.
    pub roa: Option<f64>,
    /// Return on invested capital as a fraction.
    pub roic: Option<f64>,
    /// Net margin as a fraction.
    pub net_margin: Option<f64>,
    /// EV / EBITDA multiple.
    pub ev_ebitda: Option<f64>,
    /// Net-debt ratio, where the source reports one.
    pub debt_ratio: Option<f64>,
    /// Estimated growth rate, where the source reports one.
    pub growth_rate: Option<f64>,
    /// Market capitalization in the quote currency.
    pub market_cap: Option<f64>,
    /// ISO currency code of `price`.
    pub currency: Option<String>,
    /// Display name of the instrument.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Subsector classification.
    pub subsector: Option<String>,
    /// Consensus analyst recommendation label.
    pub recommendation: Option<String>,
    /// Provider-specific rating grade.
    pub rating: Option<String>,
    /// Outbound link to the provider's page for the instrument.
    pub link: Option<String>,
}

/// Normalized real-estate fund (FII) metrics from one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundSnapshot {
    /// Provider that produced this payload.
    pub source: String,
    /// Bare ticker.
    pub ticker: String,
    /// Asset-class discriminator, always `"FII"`.
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Last traded quota price.
    pub price: Option<f64>,
    /// Trailing dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Price / book (P/VP) ratio.
    pub pvp_ratio: Option<f64>,
    /// Last distribution per quota.
    pub distribution: Option<f64>,
    /// Fund segment, where the source reports one.
    pub sector: Option<String>,
    /// Outbound link to the provider's page for the fund.
    pub link: Option<String>,
}

/// Asset-class tag used by fund snapshots.
pub const FII_TYPE: &str = "FII";

/// One entry in a merged search response.
///
/// Identity within a consolidated response is the uppercased ticker; later
/// duplicates across providers are dropped, not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Ticker as reported by the source.
    pub ticker: String,
    /// Display name.
    pub name: Option<String>,
    /// Instrument type label as reported by the source.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Outbound link to the provider's page for the instrument.
    pub link: Option<String>,
}

/// Merged search response, ordered by provider priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// De-duplicated hits in provider-priority order.
    pub results: Vec<SearchHit>,
}

/// Per-ticker consolidated view across all providers.
///
/// The top-level fields are resolved by scanning providers in a fixed
/// priority order and taking the first present value; the raw per-provider
/// outcomes are preserved verbatim under `sources` for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedQuote {
    /// Bare ticker the consolidation was performed for.
    pub ticker: Ticker,
    /// First non-null price in priority order. `None` only when no provider
    /// supplied one.
    pub price: Option<f64>,
    /// Intraday change percent, from the market-data provider.
    pub change_percent: Option<f64>,
    /// First non-null dividend yield (fraction) in priority order.
    pub dividend_yield: Option<f64>,
    /// Quote currency; defaults to the domestic code when unreported.
    pub currency: String,
    /// Raw per-provider outcomes, keyed by provider name.
    pub sources: BTreeMap<String, QuoteFetch>,
    /// Outbound reference links keyed by provider name.
    pub links: BTreeMap<String, String>,
    /// Consolidation timestamp.
    pub as_of: DateTime<Utc>,
}

/// Fund (FII) consolidation: source-keyed, never flattened.
///
/// Fund metrics differ enough between providers that collapsing them into a
/// single top level would lose information, so each source's snapshot is
/// preserved under its own key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundReport {
    /// Bare ticker the consolidation was performed for.
    pub ticker: Ticker,
    /// Raw per-provider outcomes, keyed by provider name.
    pub sources: BTreeMap<String, FundFetch>,
    /// Consolidation timestamp.
    pub as_of: DateTime<Utc>,
}

/// One analyst recommendation row, passed through from a fundamentals
/// provider with loose field mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// Issuing broker or agency.
    pub broker: Option<String>,
    /// Recommendation label (buy/hold/sell or source-specific grade).
    pub rating: Option<String>,
    /// Published target price, where present.
    pub target_price: Option<f64>,
    /// Publication date as reported by the source.
    pub updated_at: Option<String>,
}
