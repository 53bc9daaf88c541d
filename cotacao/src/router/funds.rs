use std::collections::BTreeMap;

use tracing::{debug, warn};

use cotacao_core::{Capability, CotacaoError, FundFetch, FundReport, Ticker};

use crate::Cotacao;
use crate::core::tag_err;
use crate::router::util::join_with_deadline;

impl Cotacao {
    /// Consolidate real-estate fund (FII) metrics across fund-capable
    /// providers.
    ///
    /// Only providers advertising the fund capability are queried, since the
    /// generic market-data provider does not cover this asset class. Unlike
    /// the quote path there is no field-level merge: fund metrics differ
    /// enough between sources that the report stays keyed by source name,
    /// each value the provider's raw outcome.
    ///
    /// # Errors
    /// - `Unsupported` when no registered provider serves fund metrics.
    /// - `NotFound` when every fund-capable provider came back absent.
    /// - `RequestTimeout` when an overall deadline is configured and elapses.
    pub async fn fund(&self, ticker: &Ticker) -> Result<FundReport, CotacaoError> {
        let timeout = self.cfg.provider_timeout;

        let tasks: Vec<_> = self
            .providers
            .iter()
            .filter(|p| p.as_fund_provider().is_some())
            .map(|p| {
                let p = p.clone();
                let t = ticker.clone();
                async move {
                    let name = p.name();
                    let res = match p.as_fund_provider() {
                        Some(f) => {
                            Self::provider_call_with_timeout(name, "fund", timeout, f.fetch_fund(&t))
                                .await
                        }
                        None => Err(CotacaoError::unsupported("fund")),
                    };
                    (name, res)
                }
            })
            .collect();

        if tasks.is_empty() {
            return Err(CotacaoError::unsupported(Capability::Fund.as_str()));
        }

        let joined = join_with_deadline(tasks, self.cfg.request_timeout, Capability::Fund).await?;

        let mut sources: BTreeMap<String, FundFetch> = BTreeMap::new();
        for (name, res) in joined {
            match res {
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
                            "fund provider failed; treating as absent"
                        );
                    } else {
                        debug!(provider = name, ticker = %ticker, error = %e, "fund provider absent");
                    }
                }
            }
        }

        if sources.is_empty() {
            return Err(CotacaoError::not_found(ticker.bare()));
        }

        Ok(FundReport {
            ticker: ticker.clone(),
            sources,
            as_of: chrono::Utc::now(),
        })
    }
}
