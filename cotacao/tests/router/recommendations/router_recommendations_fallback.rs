use std::sync::Arc;

use cotacao::Cotacao;
use cotacao_core::{CotacaoError, RecommendationEntry};

use crate::helpers::{MockConnector, PETR4, ticker};

fn rows(broker: &str) -> Vec<RecommendationEntry> {
    vec![RecommendationEntry {
        broker: Some(broker.to_string()),
        rating: Some("buy".to_string()),
        target_price: Some(45.0),
        updated_at: None,
    }]
}

#[tokio::test]
async fn first_provider_with_rows_wins() {
    let empty: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "empty",
        recommendations_fn: Some(Arc::new(|_| Ok(Vec::new()))),
        ..Default::default()
    });
    let full: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "full",
        recommendations_fn: Some(Arc::new(|_| Ok(rows("XP Investimentos")))),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(empty)
        .with_provider(full)
        .build()
        .unwrap();

    let out = cot.recommendations(&ticker(PETR4)).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].broker.as_deref(), Some("XP Investimentos"));
}

#[tokio::test]
async fn upstream_failure_falls_through_to_the_next_provider() {
    let broken: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "broken",
        recommendations_fn: Some(Arc::new(|_| {
            Err(CotacaoError::provider("broken", "500 from upstream"))
        })),
        ..Default::default()
    });
    let full: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "full",
        recommendations_fn: Some(Arc::new(|_| Ok(rows("BTG Pactual")))),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(broken)
        .with_provider(full)
        .build()
        .unwrap();

    let out = cot.recommendations(&ticker(PETR4)).await.unwrap();
    assert_eq!(out[0].broker.as_deref(), Some("BTG Pactual"));
}

#[tokio::test]
async fn all_empty_yields_an_empty_list_not_an_error() {
    let empty: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "empty",
        recommendations_fn: Some(Arc::new(|_| Ok(Vec::new()))),
        ..Default::default()
    });

    let cot = Cotacao::builder().with_provider(empty).build().unwrap();
    let out = cot.recommendations(&ticker(PETR4)).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn no_capable_provider_is_unsupported() {
    let quote_only = crate::helpers::m_quote("quote_only", Some(1.0));
    let cot = Cotacao::builder().with_provider(quote_only).build().unwrap();

    let err = cot.recommendations(&ticker(PETR4)).await.unwrap_err();
    assert!(matches!(err, CotacaoError::Unsupported { .. }));
}
