//! Configuration shared between the orchestrator and its callers.

use std::time::Duration;

use crate::provider::{ProviderKey, keys};

/// Global configuration for the `Cotacao` orchestrator.
///
/// The priority lists are *field-level*: each consolidated field is resolved
/// by scanning providers in the declared order and taking the first present
/// value. They are fixed per configuration, never derived from response
/// arrival order.
#[derive(Debug, Clone)]
pub struct ConsolidatorConfig {
    /// Priority order for the consolidated `price` field.
    pub price_priority: Vec<ProviderKey>,
    /// Priority order for the consolidated `dividend_yield` field.
    pub dividend_yield_priority: Vec<ProviderKey>,
    /// Priority order for the consolidated `change_percent` field.
    ///
    /// Only the generic market-data provider reports intraday change, so the
    /// default list has a single entry.
    pub change_percent_priority: Vec<ProviderKey>,
    /// Concatenation order for merged search results.
    pub search_priority: Vec<ProviderKey>,
    /// Currency code assumed when no provider reports one.
    pub default_currency: String,
    /// Timeout applied to each individual provider call.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out aggregations.
    pub request_timeout: Option<Duration>,
}

impl Default for ConsolidatorConfig {
    fn default() -> Self {
        Self {
            price_priority: vec![keys::YAHOO, keys::STATUS_INVEST, keys::INVESTIDOR10],
            dividend_yield_priority: vec![keys::YAHOO, keys::INVESTIDOR10, keys::STATUS_INVEST],
            change_percent_priority: vec![keys::YAHOO],
            search_priority: vec![keys::YAHOO, keys::INVESTIDOR10, keys::STATUS_INVEST],
            default_currency: "BRL".to_string(),
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}
