use cotacao::Cotacao;

use crate::helpers::{hit, m_search};

#[tokio::test]
async fn duplicate_tickers_are_dropped_case_insensitively() {
    let a = m_search(
        "prov_a",
        vec![hit("PETR4", "Petróleo Brasileiro"), hit("VALE3", "Vale")],
    );
    let b = m_search(
        "prov_b",
        vec![hit("petr4", "Petrobras PN"), hit("ITUB4", "Itaú Unibanco")],
    );

    let cot = Cotacao::builder()
        .with_provider(a)
        .with_provider(b)
        .build()
        .unwrap();

    let out = cot.search("petr").await.unwrap();
    let tickers: Vec<&str> = out.results.iter().map(|h| h.ticker.as_str()).collect();
    // prov_b's lowercase duplicate of PETR4 is dropped; the first writer's
    // entry survives untouched.
    assert_eq!(tickers, vec!["PETR4", "VALE3", "ITUB4"]);
    assert_eq!(
        out.results[0].name.as_deref(),
        Some("Petróleo Brasileiro")
    );
}

#[tokio::test]
async fn search_is_idempotent() {
    let a = m_search("prov_a", vec![hit("PETR4", "Petrobras"), hit("VALE3", "Vale")]);

    let cot = Cotacao::builder().with_provider(a).build().unwrap();

    let first = cot.search("p").await.unwrap();
    let second = cot.search("p").await.unwrap();
    assert_eq!(first, second);
}
