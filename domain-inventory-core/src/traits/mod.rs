//! Collaborator abstraction trait definition

mod account_source;
mod fallback_resolver;
mod inventory_store;

pub use account_source::AccountSource;
pub use fallback_resolver::FallbackResolver;
pub use inventory_store::InventoryStore;
