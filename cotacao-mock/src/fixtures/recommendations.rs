use cotacao_core::RecommendationEntry;

pub fn by_ticker(bare: &str) -> Vec<RecommendationEntry> {
    match bare {
        "PETR4" => vec![
            row("XP Investimentos", "buy", 45.0, "2026-08-01"),
            row("BTG Pactual", "hold", 40.0, "2026-07-15"),
        ],
        "VALE3" => vec![row("Itaú BBA", "buy", 75.0, "2026-08-10")],
        _ => Vec::new(),
    }
}

fn row(broker: &str, rating: &str, target: f64, date: &str) -> RecommendationEntry {
    RecommendationEntry {
        broker: Some(broker.to_string()),
        rating: Some(rating.to_string()),
        target_price: Some(target),
        updated_at: Some(date.to_string()),
    }
}
