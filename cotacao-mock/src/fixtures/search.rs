use cotacao_core::SearchHit;
use cotacao_core::connector::SEARCH_LIMIT;

const UNIVERSE: &[(&str, &str, &str)] = &[
    ("PETR4", "Petróleo Brasileiro S.A.", "stock"),
    ("PETR3", "Petróleo Brasileiro S.A.", "stock"),
    ("VALE3", "Vale S.A.", "stock"),
    ("ITUB4", "Itaú Unibanco Holding S.A.", "stock"),
    ("MXRF11", "Maxi Renda FII", "fii"),
    ("HGLG11", "CSHG Logística FII", "fii"),
];

pub fn search(query: &str) -> Vec<SearchHit> {
    let needle = query.to_ascii_uppercase();
    UNIVERSE
        .iter()
        .filter(|(ticker, name, _)| {
            ticker.contains(&needle) || name.to_ascii_uppercase().contains(&needle)
        })
        .take(SEARCH_LIMIT)
        .map(|(ticker, name, kind)| SearchHit {
            ticker: (*ticker).to_string(),
            name: Some((*name).to_string()),
            kind: Some((*kind).to_string()),
            link: None,
        })
        .collect()
}
