//! Consolidate a quote and a fund report with structured logging enabled.
//!
//! Run with `RUST_LOG=cotacao=debug cargo run -p cotacao --example consolidate`.

use std::sync::Arc;

use cotacao::{Cotacao, Ticker};
use cotacao_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cot = Cotacao::builder()
        .with_provider(Arc::new(MockConnector::new()))
        .build()?;

    let quote = cot.quote(&Ticker::parse("PETR4")?).await?;
    println!(
        "PETR4: price={:?} dy={:?} currency={}",
        quote.price, quote.dividend_yield, quote.currency
    );

    let fund = cot.fund(&Ticker::parse("MXRF11")?).await?;
    for (source, outcome) in &fund.sources {
        println!("MXRF11 via {source}: {outcome:?}");
    }

    Ok(())
}
