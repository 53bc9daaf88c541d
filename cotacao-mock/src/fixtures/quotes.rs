use cotacao_core::ProviderQuote;

pub fn by_ticker(bare: &str) -> Option<ProviderQuote> {
    match bare {
        "PETR4" => Some(q(bare, "Petróleo Brasileiro S.A.", 38.40, 0.082, Some(4.1), Some(0.21))),
        "VALE3" => Some(q(bare, "Vale S.A.", 61.50, 0.091, Some(5.3), Some(0.18))),
        "ITUB4" => Some(q(bare, "Itaú Unibanco Holding S.A.", 34.90, 0.065, Some(9.8), Some(0.20))),
        "MXRF11" => Some(q(bare, "Maxi Renda FII", 10.40, 0.12, None, None)),
        _ => None,
    }
}

fn q(bare: &str, name: &str, price: f64, dy: f64, pl: Option<f64>, roe: Option<f64>) -> ProviderQuote {
    ProviderQuote {
        source: "cotacao-mock".to_string(),
        ticker: bare.to_string(),
        price: Some(price),
        change_percent: Some(0.5),
        dividend_yield: Some(dy),
        pe_ratio: pl,
        roe,
        currency: Some("BRL".to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}
