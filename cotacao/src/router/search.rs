use std::collections::BTreeSet;

use tracing::{debug, warn};

use cotacao_core::{Capability, CotacaoError, SearchHit, SearchResults};

use crate::Cotacao;
use crate::core::tag_err;
use crate::router::util::join_with_deadline;

impl Cotacao {
    /// Merged free-text instrument search across all search-capable providers.
    ///
    /// Providers are queried concurrently and their lists concatenated in
    /// the configured priority order, then de-duplicated by uppercased
    /// ticker. First writer wins, later entries with the same ticker are
    /// dropped even when richer. A failing provider contributes nothing;
    /// search never fails on upstream errors.
    ///
    /// # Errors
    /// - `Unsupported` when no registered provider serves search.
    /// - `RequestTimeout` when an overall deadline is configured and elapses.
    pub async fn search(&self, query: &str) -> Result<SearchResults, CotacaoError> {
        let timeout = self.cfg.provider_timeout;
        let ordered = self.ordered_by(&self.cfg.search_priority);

        let tasks: Vec<_> = ordered
            .into_iter()
            .map(|p| {
                let q = query.to_string();
                async move {
                    let name = p.name();
                    match p.as_search_provider() {
                        Some(sp) => {
                            let res = Self::provider_call_with_timeout(
                                name,
                                "search",
                                timeout,
                                sp.search(&q),
                            )
                            .await;
                            (name, true, res)
                        }
                        None => (name, false, Ok(Vec::new())),
                    }
                }
            })
            .collect();

        // join_all preserves task order, so merged output follows the
        // declared priority list, not completion order.
        let joined = join_with_deadline(tasks, self.cfg.request_timeout, Capability::Search).await?;

        let mut results: Vec<SearchHit> = Vec::new();
        let mut seen = BTreeSet::<String>::new();
        let mut attempted_any = false;
        for (name, attempted, res) in joined {
            attempted_any |= attempted;
            match res {
                Ok(hits) => {
                    for hit in hits {
                        if seen.insert(hit.ticker.to_ascii_uppercase()) {
                            results.push(hit);
                        }
                    }
                }
                Err(e) => {
                    let e = tag_err(name, e);
                    if e.is_actionable() {
                        warn!(
                            provider = name,
                            query,
                            error = %e,
                            "search provider failed; contributing no results"
                        );
                    } else {
                        debug!(provider = name, query, error = %e, "search provider absent");
                    }
                }
            }
        }

        if !attempted_any {
            return Err(CotacaoError::unsupported(Capability::Search.as_str()));
        }

        Ok(SearchResults { results })
    }
}
