use serde::{Deserialize, Serialize};

use cotacao_types::CotacaoError;

/// Validated B3 ticker symbol in bare (unsuffixed) form.
///
/// Two representations exist for the same instrument: the bare form
/// (`PETR4`) used by the fundamentals providers and in outward links, and
/// the market-qualified form (`PETR4.SA`) used by the generic market-data
/// provider. Parsing always normalizes to the bare form; [`Ticker::qualified`]
/// derives the other on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

/// Exchange suffix appended by the market-qualified form.
const MARKET_SUFFIX: &str = ".SA";

impl Ticker {
    /// Parse an arbitrary user-supplied symbol into a bare ticker.
    ///
    /// Accepts either form in any case, trims whitespace, strips a trailing
    /// `.SA` suffix, and uppercases the rest.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the remaining symbol is empty, longer than
    /// 10 characters, or contains non-alphanumeric characters.
    pub fn parse(raw: &str) -> Result<Self, CotacaoError> {
        let trimmed = raw.trim();
        let bare = trimmed
            .strip_suffix(MARKET_SUFFIX)
            .or_else(|| trimmed.strip_suffix(".sa"))
            .unwrap_or(trimmed);

        if bare.is_empty() || bare.len() > 10 {
            return Err(CotacaoError::InvalidArg(format!(
                "invalid ticker: {raw:?}"
            )));
        }
        if !bare.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CotacaoError::InvalidArg(format!(
                "ticker contains invalid characters: {raw:?}"
            )));
        }
        Ok(Self(bare.to_ascii_uppercase()))
    }

    /// The bare symbol, e.g. `PETR4`.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.0
    }

    /// The market-qualified symbol, e.g. `PETR4.SA`.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}{MARKET_SUFFIX}", self.0)
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = CotacaoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

impl std::str::FromStr for Ticker {
    type Err = CotacaoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
