//! Core contracts and domain types for the cotacao consolidation workspace.
//!
//! This crate defines:
//! - the provider role traits ([`connector::QuoteProvider`],
//!   [`connector::SearchProvider`], [`connector::FundProvider`],
//!   [`connector::RecommendationsProvider`]) and the base
//!   [`connector::Provider`] capability directory,
//! - the normalized domain schemas each connector maps its upstream payloads
//!   into ([`ProviderQuote`], [`FundSnapshot`], [`SearchHit`]) together with
//!   the explicit per-call outcome type [`Fetch`],
//! - the consolidated response shapes ([`ConsolidatedQuote`], [`FundReport`],
//!   [`SearchResults`]),
//! - outbound reference-link templates ([`links`]),
//! - the asset scoring heuristic and batch analyzer ([`analysis`]).
#![warn(missing_docs)]

pub mod analysis;
pub mod connector;
pub mod links;
mod ticker;
pub mod types;

pub use cotacao_types::{Capability, ConsolidatorConfig, CotacaoError, ErrorBody, ProviderKey};

pub use connector::Provider;
pub use ticker::Ticker;
pub use types::{
    ConsolidatedQuote, Fetch, FundFetch, FundReport, FundSnapshot, ProviderQuote, ProviderRef,
    QuoteFetch, RecommendationEntry, SearchHit, SearchResults,
};
