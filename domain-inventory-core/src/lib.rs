//! Domain Inventory Core Library
//!
//! Core logic of the domain inventory tool:
//! - Domain name syntax validation
//! - Inventory cache refresh across every configured registrar account
//! - Lookup against the cache with a live NS / WHOIS fallback
//!
//! Storage, credential loading and live lookups are abstracted through traits,
//! so the same services run against `SQLite` in the app and against mocks in tests.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use domain_inventory_provider::ProviderType;
pub use domain_inventory_toolbox::DEFAULT_LOOKUP_TIMEOUT;
pub use error::{CoreError, CoreResult};
pub use services::{InventoryService, LookupService, ToolboxFallbackResolver};
pub use traits::{AccountSource, FallbackResolver, InventoryStore};
pub use types::{
    DomainRecord, FallbackResult, InventoryAccount, LookupError, LookupOutcome, RefreshFailure,
    RefreshOutcome, WhoisInfo,
};
pub use validation::{SyntaxError, ValidatedDomainName, validate, validate_bytes};
