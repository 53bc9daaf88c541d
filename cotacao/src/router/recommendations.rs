use tracing::{debug, warn};

use cotacao_core::{Capability, CotacaoError, RecommendationEntry, Ticker};

use crate::Cotacao;
use crate::core::tag_err;

impl Cotacao {
    /// Analyst recommendations, first provider with rows wins.
    ///
    /// Providers are tried in search-priority order; an upstream failure is
    /// logged and the next provider is consulted. An empty list is a valid
    /// outcome, never escalated to an error.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered provider serves
    /// recommendations.
    pub async fn recommendations(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<RecommendationEntry>, CotacaoError> {
        let timeout = self.cfg.provider_timeout;
        let mut attempted_any = false;

        for p in self.ordered_by(&self.cfg.search_priority) {
            let Some(rp) = p.as_recommendations_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                p.name(),
                "recommendations",
                timeout,
                rp.recommendations(ticker),
            )
            .await
            {
                Ok(rows) if !rows.is_empty() => return Ok(rows),
                Ok(_) => {}
                Err(e) => {
                    let e = tag_err(p.name(), e);
                    if e.is_actionable() {
                        warn!(
                            provider = p.name(),
                            ticker = %ticker,
                            error = %e,
                            "recommendations provider failed; trying next"
                        );
                    } else {
                        debug!(provider = p.name(), ticker = %ticker, error = %e, "recommendations provider absent");
                    }
                }
            }
        }

        if !attempted_any {
            return Err(CotacaoError::unsupported(
                Capability::Recommendations.as_str(),
            ));
        }
        Ok(Vec::new())
    }
}
