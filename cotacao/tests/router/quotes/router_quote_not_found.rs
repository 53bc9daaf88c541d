use std::sync::Arc;

use cotacao::Cotacao;
use cotacao_core::{CotacaoError, ErrorBody};

use crate::helpers::{MockConnector, PETR4, m_quote_empty, ticker};

#[tokio::test]
async fn all_absent_is_not_found_with_bare_ticker() {
    let a = m_quote_empty("prov_a");
    let b = m_quote_empty("prov_b");

    let cot = Cotacao::builder()
        .with_provider(a)
        .with_provider(b)
        .build()
        .unwrap();

    let err = cot.quote(&ticker("petr4.sa")).await.unwrap_err();
    match &err {
        CotacaoError::NotFound { ticker } => assert_eq!(ticker, PETR4),
        other => panic!("expected NotFound, got {other:?}"),
    }

    // The wire shape carries both the message and the bare ticker.
    let body = ErrorBody::from(&err);
    assert_eq!(body.ticker.as_deref(), Some(PETR4));
    assert!(body.error.contains(PETR4));
}

#[tokio::test]
async fn provider_failures_count_as_absence() {
    let broken: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "broken",
        quote_fn: Some(Arc::new(|_| {
            Err(CotacaoError::provider("broken", "connection reset"))
        })),
        ..Default::default()
    });
    let empty = m_quote_empty("empty");

    let cot = Cotacao::builder()
        .with_provider(broken)
        .with_provider(empty)
        .build()
        .unwrap();

    let err = cot.quote(&ticker(PETR4)).await.unwrap_err();
    assert!(matches!(err, CotacaoError::NotFound { .. }));
}

#[tokio::test]
async fn no_quote_capable_provider_is_unsupported() {
    let search_only: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "search_only",
        search_fn: Some(Arc::new(|_| Ok(Vec::new()))),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(search_only)
        .build()
        .unwrap();

    let err = cot.quote(&ticker(PETR4)).await.unwrap_err();
    assert!(matches!(err, CotacaoError::Unsupported { .. }));
}
