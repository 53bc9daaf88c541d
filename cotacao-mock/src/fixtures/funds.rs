use cotacao_core::FundSnapshot;
use cotacao_core::types::FII_TYPE;

pub fn by_ticker(bare: &str) -> Option<FundSnapshot> {
    match bare {
        "MXRF11" => Some(f(bare, 10.40, 0.12, 1.01, 0.10, "Papel")),
        "HGLG11" => Some(f(bare, 160.20, 0.085, 0.98, 1.10, "Logística")),
        _ => None,
    }
}

fn f(bare: &str, price: f64, dy: f64, pvp: f64, dist: f64, sector: &str) -> FundSnapshot {
    FundSnapshot {
        source: "cotacao-mock".to_string(),
        ticker: bare.to_string(),
        asset_type: FII_TYPE.to_string(),
        price: Some(price),
        dividend_yield: Some(dy),
        pvp_ratio: Some(pvp),
        distribution: Some(dist),
        sector: Some(sector.to_string()),
        link: None,
    }
}
