//! Cotacao consolidates Brazilian market data across multiple providers.
//!
//! Overview
//! - Fans a single request out to every registered provider that advertises
//!   the capability, each call wrapped in its own timeout and failure
//!   boundary.
//! - Merges the collected outcomes under fixed per-field priority orders:
//!   first present value wins, never an average, never arrival order.
//! - Treats provider failure as absence: a transport error from one source
//!   is logged and dropped, and "not found" is reported only when every
//!   source came back empty.
//!
//! Building an orchestrator with the three stock connectors:
//! ```rust,ignore
//! use std::sync::Arc;
//! use cotacao::Cotacao;
//!
//! let consolidator = Cotacao::builder()
//!     .with_provider(Arc::new(cotacao_yahoo::YahooConnector::new_default()))
//!     .with_provider(Arc::new(cotacao_statusinvest::StatusInvestConnector::new_default()))
//!     .with_provider(Arc::new(cotacao_investidor10::Investidor10Connector::new_default()))
//!     .build()?;
//!
//! let ticker = cotacao::Ticker::parse("PETR4")?;
//! let quote = consolidator.quote(&ticker).await?;
//! let hits = consolidator.search("petro").await?;
//! let fii = consolidator.fund(&cotacao::Ticker::parse("MXRF11")?).await?;
//! ```
//!
//! The default priority configuration mirrors the production setup:
//! price resolves yahoo → status-invest → investidor10, dividend yield
//! yahoo → investidor10 → status-invest, intraday change from yahoo alone,
//! and search results concatenate yahoo, investidor10, status-invest before
//! de-duplication by uppercased ticker.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Cotacao, CotacaoBuilder};
pub use router::util::join_with_deadline;

// Re-export core types for convenience
pub use cotacao_core::{
    Capability,
    ConsolidatedQuote,
    ConsolidatorConfig,
    CotacaoError,
    ErrorBody,
    Fetch,
    FundFetch,
    FundReport,
    FundSnapshot,
    Provider,
    ProviderKey,
    ProviderQuote,
    ProviderRef,
    QuoteFetch,
    RecommendationEntry,
    SearchHit,
    SearchResults,
    Ticker,
};
