//! Provider metadata types usable across crates.

/// Typed key for identifying providers in priority configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderKey(pub &'static str);

impl ProviderKey {
    /// Construct a new typed provider key from a static name.
    ///
    /// This is useful when configuring per-field priority lists.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ProviderKey> for &'static str {
    fn from(k: ProviderKey) -> Self {
        k.0
    }
}

impl std::fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Well-known keys for the stock provider crates.
///
/// Connector crates expose the same values through their `KEY` constants;
/// having them here lets default priority lists be built without linking
/// against every connector crate.
pub mod keys {
    use super::ProviderKey;

    /// Generic market-data provider (Yahoo Finance).
    pub const YAHOO: ProviderKey = ProviderKey::new("cotacao-yahoo");
    /// Fundamentals/ratings provider backed by Status Invest.
    pub const STATUS_INVEST: ProviderKey = ProviderKey::new("cotacao-statusinvest");
    /// Fundamentals/ratings provider backed by Investidor10.
    pub const INVESTIDOR10: ProviderKey = ProviderKey::new("cotacao-investidor10");
}
