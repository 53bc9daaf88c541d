use std::sync::Arc;

use cotacao::Cotacao;
use cotacao_core::CotacaoError;

use crate::helpers::{MockConnector, hit, m_search};

#[tokio::test]
async fn merged_output_follows_declared_priority_not_registration() {
    let a = m_search("prov_a", vec![hit("AAAA3", "Alpha")]);
    let b = m_search("prov_b", vec![hit("BBBB3", "Beta")]);

    let cot = Cotacao::builder()
        .with_provider(a.clone())
        .with_provider(b.clone())
        .prefer_search(&[b, a])
        .build()
        .unwrap();

    let out = cot.search("b").await.unwrap();
    let tickers: Vec<&str> = out.results.iter().map(|h| h.ticker.as_str()).collect();
    assert_eq!(tickers, vec!["BBBB3", "AAAA3"]);
}

#[tokio::test]
async fn failing_provider_contributes_nothing_without_failing_the_search() {
    let broken: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "broken",
        search_fn: Some(Arc::new(|_| {
            Err(CotacaoError::provider("broken", "503 from upstream"))
        })),
        ..Default::default()
    });
    let healthy = m_search("healthy", vec![hit("PETR4", "Petrobras")]);

    let cot = Cotacao::builder()
        .with_provider(broken)
        .with_provider(healthy)
        .build()
        .unwrap();

    let out = cot.search("petr").await.unwrap();
    assert_eq!(out.results.len(), 1);
    assert_eq!(out.results[0].ticker, "PETR4");
}

#[tokio::test]
async fn no_search_capable_provider_is_unsupported() {
    let quote_only = crate::helpers::m_quote("quote_only", Some(1.0));
    let cot = Cotacao::builder().with_provider(quote_only).build().unwrap();

    let err = cot.search("petr").await.unwrap_err();
    assert!(matches!(err, CotacaoError::Unsupported { .. }));
}
