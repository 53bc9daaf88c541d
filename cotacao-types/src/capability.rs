use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with consolidator operations and allow consistent
/// Display formatting and match-exhaustive handling when adding new
/// capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Consolidated point-in-time quote for a single ticker.
    Quote,
    /// Free-text instrument search.
    Search,
    /// Real-estate fund (FII) metrics keyed by source.
    Fund,
    /// Analyst recommendations passthrough.
    Recommendations,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Search => "search",
            Self::Fund => "fund",
            Self::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
