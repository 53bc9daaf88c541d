use std::sync::Arc;
use std::sync::atomic::Ordering;

use cotacao::Cotacao;
use cotacao_core::{CotacaoError, Fetch};

use crate::helpers::{MockConnector, MXRF11, fund_data, quote_data, ticker};

#[tokio::test]
async fn fund_fan_out_skips_quote_only_providers() {
    // Shaped like the production setup: a market-data provider with no fund
    // capability plus two fundamentals providers.
    let market: Arc<MockConnector> = Arc::new(MockConnector {
        name: "cotacao-yahoo",
        quote_fn: Some(Arc::new(|_| Ok(quote_data("cotacao-yahoo", Some(10.0), None)))),
        ..Default::default()
    });
    let fund_a: Arc<MockConnector> = Arc::new(MockConnector {
        name: "fund_a",
        fund_fn: Some(Arc::new(|_| Ok(fund_data("fund_a", 10.4, 0.12)))),
        ..Default::default()
    });
    let fund_b: Arc<MockConnector> = Arc::new(MockConnector {
        name: "fund_b",
        fund_fn: Some(Arc::new(|_| Ok(Fetch::Empty))),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(market.clone())
        .with_provider(fund_a.clone())
        .with_provider(fund_b.clone())
        .build()
        .unwrap();

    let report = cot.fund(&ticker(MXRF11)).await.unwrap();

    // Keyed by source, no flattening; the empty provider is simply absent.
    assert_eq!(report.sources.len(), 1);
    let snap = report.sources["fund_a"].as_data().unwrap();
    assert_eq!(snap.asset_type, "FII");
    assert_eq!(snap.dividend_yield, Some(0.12));

    // The market-data provider was never consulted on any capability.
    assert_eq!(market.quote_calls.load(Ordering::SeqCst), 0);
    assert_eq!(market.fund_calls.load(Ordering::SeqCst), 0);
    assert_eq!(fund_a.fund_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn all_fund_sources_absent_is_not_found() {
    let fund_a: Arc<MockConnector> = Arc::new(MockConnector {
        name: "fund_a",
        fund_fn: Some(Arc::new(|_| Ok(Fetch::Empty))),
        ..Default::default()
    });
    let fund_b: Arc<MockConnector> = Arc::new(MockConnector {
        name: "fund_b",
        fund_fn: Some(Arc::new(|_| {
            Err(CotacaoError::provider("fund_b", "connection reset"))
        })),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(fund_a)
        .with_provider(fund_b)
        .build()
        .unwrap();

    let err = cot.fund(&ticker(MXRF11)).await.unwrap_err();
    match err {
        CotacaoError::NotFound { ticker } => assert_eq!(ticker, MXRF11),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn no_fund_capable_provider_is_unsupported() {
    let quote_only = crate::helpers::m_quote("quote_only", Some(1.0));
    let cot = Cotacao::builder().with_provider(quote_only).build().unwrap();

    let err = cot.fund(&ticker(MXRF11)).await.unwrap_err();
    assert!(matches!(err, CotacaoError::Unsupported { .. }));
}
