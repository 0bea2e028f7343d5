//! Core data model

mod inventory;
mod lookup;

pub use inventory::{DomainRecord, InventoryAccount, RefreshFailure, RefreshOutcome};
pub use lookup::{FallbackResult, LookupError, LookupOutcome, WhoisInfo};
