//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error types
pub use domain_inventory_provider::ProviderError;
pub use domain_inventory_toolbox::ToolboxError;

use crate::types::RefreshOutcome;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Storage layer error (schema, wipe, insert, query)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Credential file missing or malformed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Refresh finished, but some providers or accounts contributed nothing.
    /// Whatever was fetched is already stored.
    #[error(
        "Refresh incomplete: {} failure(s), {} record(s) stored",
        .0.failures.len(),
        .0.total_inserted()
    )]
    RefreshIncomplete(RefreshOutcome),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, operator configuration) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::StorageError(_) | Self::RefreshIncomplete(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
