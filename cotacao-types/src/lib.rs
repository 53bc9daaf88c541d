//! Identifiers, capability labels, configuration and error types shared
//! across the cotacao consolidation workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod provider;

pub use capability::Capability;
pub use config::ConsolidatorConfig;
pub use error::{CotacaoError, ErrorBody};
pub use provider::{ProviderKey, keys};
