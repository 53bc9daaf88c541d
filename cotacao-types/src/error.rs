use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cotacao workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// provider-tagged failures, not-found conditions, and timeouts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CotacaoError {
    /// The requested capability is not implemented by any registered provider.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "fund").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual provider returned an error.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// Every queried provider came back empty for the given ticker.
    ///
    /// This is the single user-visible error of the consolidation core and a
    /// normal outcome, not a transport fault.
    #[error("no data found for {ticker}")]
    NotFound {
        /// Bare ticker the lookup was performed for.
        ticker: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
        /// Capability label (e.g. "quote", "search", "fund").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Local file I/O failure in the batch analysis path.
    #[error("io failure on {path}: {msg}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl CotacaoError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a bare ticker.
    pub fn not_found(ticker: impl Into<String>) -> Self {
        Self::NotFound {
            ticker: ticker.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to operators as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a
    /// benign not-found condition; the consolidators log those at debug.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}

/// Wire shape for the error payload served by the excluded HTTP layer.
///
/// A `NotFound` error carries its bare ticker; everything else serializes
/// with the message alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Bare ticker, present only for not-found outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

impl From<&CotacaoError> for ErrorBody {
    fn from(err: &CotacaoError) -> Self {
        let ticker = match err {
            CotacaoError::NotFound { ticker } => Some(ticker.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            ticker,
        }
    }
}
