//! Asset scoring heuristic and the file-based batch analyzer.
//!
//! The score favors short-to-medium term indicators: FIIs score on dividend
//! yield alone, equities on inverse P/L plus ROE. Pure arithmetic, no I/O in
//! [`calculate_score`]; the batch path reads a JSON array of assets, scores
//! each, and writes the list back sorted descending by score.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

use cotacao_types::CotacaoError;

/// Sector label marking real-estate funds in batch inputs.
pub const FII_SECTOR: &str = "Fundo Imobiliário";

/// One asset record in a batch analysis run.
///
/// Only the fields the scorer inspects are typed; everything else rides
/// along in `extra` and is preserved verbatim in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Sector label; [`FII_SECTOR`] selects the fund scoring rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setor: Option<String>,
    /// Price / earnings ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pl: Option<f64>,
    /// Return on equity as a fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roe: Option<f64>,
    /// Dividend yield as a fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    /// Derived score; populated by the analyzer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Passthrough for any other input fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Score an asset. Higher is better.
///
/// FIIs score `round(dy * 100)` when the yield is positive, zero otherwise.
/// Equities accumulate `(1 / pl) * 20` when P/L is positive and `roe * 80`
/// when ROE is present and non-zero; each term is independently optional.
#[must_use]
pub fn calculate_score(asset: &Asset) -> i64 {
    if asset.setor.as_deref() == Some(FII_SECTOR) {
        return match asset.dy {
            Some(dy) if dy > 0.0 => (dy * 100.0).round() as i64,
            _ => 0,
        };
    }

    let mut score = 0.0;
    if let Some(pl) = asset.pl
        && pl > 0.0
    {
        score += (1.0 / pl) * 20.0;
    }
    if let Some(roe) = asset.roe
        && roe != 0.0
    {
        score += roe * 80.0;
    }
    score.round() as i64
}

/// Score a batch of assets and return them sorted descending by score.
///
/// The sort is stable: ties keep their original relative order.
#[must_use]
pub fn rank(mut assets: Vec<Asset>) -> Vec<Asset> {
    for asset in &mut assets {
        asset.score = Some(calculate_score(asset));
    }
    assets.sort_by(|a, b| b.score.cmp(&a.score));
    assets
}

/// Read assets from `input`, score and rank them, and write the result to
/// `output`.
///
/// # Errors
/// A missing or unparsable input aborts with a logged message and no output
/// written; a write failure is logged and propagated with no partial-file
/// guarantee.
pub fn analyze_file(input: &Path, output: &Path) -> Result<(), CotacaoError> {
    let file = File::open(input).map_err(|e| {
        error!(path = %input.display(), error = %e, "input file not readable");
        CotacaoError::Io {
            path: input.display().to_string(),
            msg: e.to_string(),
        }
    })?;

    let assets: Vec<Asset> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        error!(path = %input.display(), error = %e, "input file is not a JSON asset array");
        CotacaoError::Data(e.to_string())
    })?;

    let ranked = rank(assets);

    let out = File::create(output).map_err(|e| {
        error!(path = %output.display(), error = %e, "cannot create output file");
        CotacaoError::Io {
            path: output.display().to_string(),
            msg: e.to_string(),
        }
    })?;
    serde_json::to_writer_pretty(out, &ranked).map_err(|e| {
        error!(path = %output.display(), error = %e, "failed writing results");
        CotacaoError::Io {
            path: output.display().to_string(),
            msg: e.to_string(),
        }
    })?;

    info!(
        assets = ranked.len(),
        output = %output.display(),
        "analysis complete"
    );
    Ok(())
}
