use std::sync::Arc;

use cotacao::Cotacao;
use cotacao_core::{Fetch, ProviderRef};

use crate::helpers::{MockConnector, PETR4, m_quote, quote_data, ticker};

#[tokio::test]
async fn first_non_null_price_wins_in_priority_order() {
    let a = m_quote("prov_a", None);
    let b = m_quote("prov_b", Some(10.0));
    let c = m_quote("prov_c", Some(20.0));

    let cot = Cotacao::builder()
        .with_provider(a.clone())
        .with_provider(b.clone())
        .with_provider(c.clone())
        .prefer_price(&[a, b, c])
        .build()
        .unwrap();

    let out = cot.quote(&ticker(PETR4)).await.unwrap();
    // prov_a answered with a null price, so the next provider in line wins.
    assert_eq!(out.price, Some(10.0));
    assert_eq!(out.currency, "BRL");
    assert_eq!(out.sources.len(), 3);
}

#[tokio::test]
async fn fields_resolve_along_independent_priority_lists() {
    let a = m_quote("prov_a", Some(10.0));
    let b: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "prov_b",
        quote_fn: Some(Arc::new(|_| Ok(quote_data("prov_b", Some(20.0), Some(0.08))))),
        ..Default::default()
    });

    let cot = Cotacao::builder()
        .with_provider(a.clone())
        .with_provider(b.clone())
        .prefer_price(&[a, b.clone()])
        .prefer_dividend_yield(&[b])
        .build()
        .unwrap();

    let out = cot.quote(&ticker(PETR4)).await.unwrap();
    assert_eq!(out.price, Some(10.0));
    assert_eq!(out.dividend_yield, Some(0.08));
}

#[tokio::test]
async fn unlisted_providers_fall_back_to_registration_order() {
    // Default priority lists name the production connectors, none of which
    // are registered here, so registration order decides.
    let first = m_quote("first_registered", Some(1.0));
    let second = m_quote("second_registered", Some(2.0));

    let cot = Cotacao::builder()
        .with_provider(first)
        .with_provider(second)
        .build()
        .unwrap();

    let out = cot.quote(&ticker(PETR4)).await.unwrap();
    assert_eq!(out.price, Some(1.0));
}

#[tokio::test]
async fn reference_outcomes_are_kept_but_contribute_no_fields() {
    let degraded: Arc<dyn cotacao_core::Provider> = Arc::new(MockConnector {
        name: "degraded",
        quote_fn: Some(Arc::new(|t| {
            Ok(Fetch::Reference(ProviderRef {
                source: "degraded".to_string(),
                ticker: t.bare().to_string(),
                link: "https://example.com/PETR4".to_string(),
                note: None,
            }))
        })),
        ..Default::default()
    });
    let healthy = m_quote("healthy", Some(33.0));

    let cot = Cotacao::builder()
        .with_provider(degraded.clone())
        .with_provider(healthy)
        .prefer_price(&[degraded])
        .build()
        .unwrap();

    let out = cot.quote(&ticker(PETR4)).await.unwrap();
    // The degraded source stays visible in the response but the price comes
    // from the only provider with data.
    assert_eq!(out.price, Some(33.0));
    assert!(out.sources["degraded"].is_reference());
    assert!(out.links.contains_key("yahoo"));
}
