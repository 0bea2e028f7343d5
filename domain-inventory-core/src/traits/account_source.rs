//! Provider account source abstract Trait

use async_trait::async_trait;
use domain_inventory_provider::ProviderType;

use crate::error::CoreResult;
use crate::types::InventoryAccount;

/// Supplies the configured accounts of a provider, each with a ready gateway.
///
/// Platform implementation:
/// - `CredentialFileSource` (colon-delimited `configs/*.list` files)
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Load every account configured for `provider`.
    ///
    /// An `Err` fails the whole provider for the current refresh; an empty
    /// list is a provider with nothing configured.
    async fn load_accounts(&self, provider: ProviderType) -> CoreResult<Vec<InventoryAccount>>;
}
