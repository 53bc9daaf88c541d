use std::collections::HashMap;
use std::sync::Arc;

use cotacao_core::{ConsolidatorConfig, CotacaoError, Provider, ProviderKey};

/// Orchestrator that consolidates requests across registered providers.
pub struct Cotacao {
    pub(crate) providers: Vec<Arc<dyn Provider>>,
    pub(crate) cfg: ConsolidatorConfig,
}

/// Builder for constructing a `Cotacao` orchestrator with custom configuration.
pub struct CotacaoBuilder {
    providers: Vec<Arc<dyn Provider>>,
    cfg: ConsolidatorConfig,
}

impl Default for CotacaoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CotacaoBuilder {
    /// Create a new builder with the stock configuration.
    ///
    /// Starts with no providers; register at least one via [`with_provider`].
    /// Defaults match the production setup: 10 s per-provider timeout, no
    /// overall deadline, BRL fallback currency, and the documented per-field
    /// priority lists.
    ///
    /// [`with_provider`]: CotacaoBuilder::with_provider
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: vec![],
            cfg: ConsolidatorConfig::default(),
        }
    }

    /// Register a provider.
    ///
    /// Registration order is the fallback ordering for any provider not
    /// named in a priority list. Duplicates are not deduplicated; avoid
    /// registering the same provider twice.
    #[must_use]
    pub fn with_provider(mut self, p: Arc<dyn Provider>) -> Self {
        self.providers.push(p);
        self
    }

    /// Replace the whole configuration in one step.
    #[must_use]
    pub fn config(mut self, cfg: ConsolidatorConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the priority order used to resolve the consolidated price.
    ///
    /// Providers not listed keep their registration order after the listed
    /// ones; the list orders, it does not filter.
    #[must_use]
    pub fn prefer_price(mut self, providers_desc: &[Arc<dyn Provider>]) -> Self {
        self.cfg.price_priority = keys_of(providers_desc);
        self
    }

    /// Set the priority order used to resolve the consolidated dividend yield.
    #[must_use]
    pub fn prefer_dividend_yield(mut self, providers_desc: &[Arc<dyn Provider>]) -> Self {
        self.cfg.dividend_yield_priority = keys_of(providers_desc);
        self
    }

    /// Set the concatenation order for merged search results.
    #[must_use]
    pub fn prefer_search(mut self, providers_desc: &[Arc<dyn Provider>]) -> Self {
        self.cfg.search_priority = keys_of(providers_desc);
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Bounds every individual provider call so one hanging upstream cannot
    /// stall the whole consolidated response.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall request deadline for fan-out aggregations.
    ///
    /// When exceeded, the operation returns a `RequestTimeout` error for the
    /// capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Currency code assumed when no provider reports one.
    #[must_use]
    pub fn default_currency(mut self, code: impl Into<String>) -> Self {
        self.cfg.default_currency = code.into();
        self
    }

    /// Build the `Cotacao` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no providers have been registered via
    /// [`with_provider`](CotacaoBuilder::with_provider).
    pub fn build(mut self) -> Result<Cotacao, CotacaoError> {
        if self.providers.is_empty() {
            return Err(CotacaoError::InvalidArg(
                "no providers registered; add at least one via with_provider(...)".to_string(),
            ));
        }

        // Dedup priority lists so a repeated key cannot shadow later entries.
        for list in [
            &mut self.cfg.price_priority,
            &mut self.cfg.dividend_yield_priority,
            &mut self.cfg.change_percent_priority,
            &mut self.cfg.search_priority,
        ] {
            let mut seen = std::collections::HashSet::new();
            list.retain(|k| seen.insert(k.as_str()));
        }

        Ok(Cotacao {
            providers: self.providers,
            cfg: self.cfg,
        })
    }
}

fn keys_of(providers_desc: &[Arc<dyn Provider>]) -> Vec<ProviderKey> {
    providers_desc.iter().map(|p| p.key()).collect()
}

pub(crate) fn tag_err(provider: &str, e: CotacaoError) -> CotacaoError {
    match e {
        e @ (CotacaoError::NotFound { .. }
        | CotacaoError::ProviderTimeout { .. }
        | CotacaoError::Provider { .. }
        | CotacaoError::RequestTimeout { .. }) => e,
        other => CotacaoError::provider(provider, other.to_string()),
    }
}

impl Cotacao {
    /// Start building a new `Cotacao` instance.
    #[must_use]
    pub fn builder() -> CotacaoBuilder {
        CotacaoBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error
    /// mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        provider_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, CotacaoError>
    where
        Fut: core::future::Future<Output = Result<T, CotacaoError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CotacaoError::provider_timeout(provider_name, capability)))
    }

    /// Registered providers sorted by a priority list: listed keys first in
    /// list order, everything else after in registration order.
    pub(crate) fn ordered_by(&self, pref: &[ProviderKey]) -> Vec<Arc<dyn Provider>> {
        let pos: HashMap<&str, usize> = pref
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), i))
            .collect();
        let mut v: Vec<(usize, Arc<dyn Provider>)> =
            self.providers.iter().cloned().enumerate().collect();
        v.sort_by_key(|(orig_i, p)| (pos.get(p.name()).copied().unwrap_or(usize::MAX), *orig_i));
        v.into_iter().map(|(_, p)| p).collect()
    }
}
