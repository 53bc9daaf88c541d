use std::collections::BTreeMap;

use tracing::{debug, warn};

use cotacao_core::{
    Capability, ConsolidatedQuote, CotacaoError, Fetch, ProviderKey, ProviderQuote, QuoteFetch,
    Ticker, links,
};

use crate::Cotacao;
use crate::core::tag_err;
use crate::router::util::join_with_deadline;

impl Cotacao {
    /// Consolidate a point-in-time quote across every quote-capable provider.
    ///
    /// All providers are queried concurrently, each call bounded by the
    /// per-provider timeout and isolated in its own failure boundary; a
    /// transport failure from one source is logged and treated as absence.
    /// Field resolution happens only after all outcomes are collected,
    /// scanning the fixed priority lists and taking the first present value.
    ///
    /// # Errors
    /// - `Unsupported` when no registered provider serves quotes.
    /// - `NotFound` (carrying the bare ticker) when every provider came back
    ///   absent; this is the single user-visible error of the consolidation
    ///   core.
    /// - `RequestTimeout` when an overall deadline is configured and elapses.
    pub async fn quote(&self, ticker: &Ticker) -> Result<ConsolidatedQuote, CotacaoError> {
        let timeout = self.cfg.provider_timeout;
        let mut attempted_any = false;

        let tasks: Vec<_> = self
            .providers
            .iter()
            .filter(|p| p.as_quote_provider().is_some())
            .map(|p| {
                attempted_any = true;
                let p = p.clone();
                let t = ticker.clone();
                async move {
                    let name = p.name();
                    let res = match p.as_quote_provider() {
                        Some(q) => {
                            Self::provider_call_with_timeout(name, "quote", timeout, q.fetch_quote(&t))
                                .await
                        }
                        None => Err(CotacaoError::unsupported("quote")),
                    };
                    (name, res)
                }
            })
            .collect();

        if !attempted_any {
            return Err(CotacaoError::unsupported(Capability::Quote.as_str()));
        }

        let joined = join_with_deadline(tasks, self.cfg.request_timeout, Capability::Quote).await?;

        let mut sources: BTreeMap<String, QuoteFetch> = BTreeMap::new();
        for (name, res) in joined {
            match res {
                // An Empty outcome is genuine absence and contributes nothing,
                // not even a sources entry.
                Ok(fetch) if fetch.is_empty() => {}
                Ok(fetch) => {
                    sources.insert(name.to_string(), fetch);
                }
                Err(e) => {
                    let e = tag_err(name, e);
                    if e.is_actionable() {
                        warn!(
                            provider = name,
                            ticker = %ticker,
                            error = %e,
                            "quote provider failed; treating as absent"
                        );
                    } else {
                        debug!(provider = name, ticker = %ticker, error = %e, "quote provider absent");
                    }
                }
            }
        }

        if sources.is_empty() {
            return Err(CotacaoError::not_found(ticker.bare()));
        }

        let price = self.resolve(&sources, &self.cfg.price_priority, |q| q.price);
        let change_percent =
            self.resolve(&sources, &self.cfg.change_percent_priority, |q| q.change_percent);
        let dividend_yield =
            self.resolve(&sources, &self.cfg.dividend_yield_priority, |q| q.dividend_yield);
        let currency = self
            .resolve(&sources, &self.cfg.price_priority, |q| q.currency.clone())
            .unwrap_or_else(|| self.cfg.default_currency.clone());

        Ok(ConsolidatedQuote {
            ticker: ticker.clone(),
            price,
            change_percent,
            dividend_yield,
            currency,
            sources,
            links: links::reference_links(ticker),
            as_of: chrono::Utc::now(),
        })
    }

    /// First present value for one consolidated field, scanning providers in
    /// the declared priority order. Link-only outcomes contribute nothing.
    fn resolve<T>(
        &self,
        sources: &BTreeMap<String, QuoteFetch>,
        pref: &[ProviderKey],
        get: impl Fn(&ProviderQuote) -> Option<T>,
    ) -> Option<T> {
        for p in self.ordered_by(pref) {
            if let Some(Fetch::Data(q)) = sources.get(p.name())
                && let Some(v) = get(q)
            {
                return Some(v);
            }
        }
        None
    }
}
