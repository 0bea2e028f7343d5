//! Inventory cache types

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use domain_inventory_provider::{DomainGateway, ProviderType};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One (account, domain) pair discovered from a provider.
///
/// The cache is a multimap: the same domain may be held by several records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Provider-specific account / login identifier.
    pub account_id: String,
    /// Display identifier of the account (billing id, alias, or `account_id` again).
    pub real_id: String,
    /// Provider that reported the domain.
    pub provider: ProviderType,
    /// Domain name, case as returned by the provider.
    pub domain: String,
}

/// One configured provider account, ready to be queried.
#[derive(Clone)]
pub struct InventoryAccount {
    pub account_id: String,
    pub real_id: String,
    pub gateway: Arc<dyn DomainGateway>,
}

impl fmt::Debug for InventoryAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryAccount")
            .field("account_id", &self.account_id)
            .field("real_id", &self.real_id)
            .field("provider", &self.gateway.provider())
            .finish()
    }
}

/// A provider or account that contributed nothing to a refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshFailure {
    pub provider: ProviderType,
    /// `None` when the whole provider failed (credentials file missing or malformed).
    pub account_id: Option<String>,
    pub error: CoreError,
}

impl fmt::Display for RefreshFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.account_id {
            Some(account) => write!(f, "{} account {account}: {}", self.provider, self.error),
            None => write!(f, "{}: {}", self.provider, self.error),
        }
    }
}

/// Result of a cache refresh.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    /// Records written per provider.
    pub inserted: BTreeMap<ProviderType, usize>,
    /// Providers / accounts skipped because of an error.
    pub failures: Vec<RefreshFailure>,
}

impl RefreshOutcome {
    /// `true` only if every provider and every account succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total records written.
    #[must_use]
    pub fn total_inserted(&self) -> usize {
        self.inserted.values().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn outcome_without_failures_is_complete() {
        let mut outcome = RefreshOutcome::default();
        outcome.inserted.insert(ProviderType::Ovh, 3);
        outcome.inserted.insert(ProviderType::Godaddy, 2);
        assert!(outcome.is_complete());
        assert_eq!(outcome.total_inserted(), 5);
    }

    #[test]
    fn failure_display_names_provider_and_account() {
        let failure = RefreshFailure {
            provider: ProviderType::Cloudflare,
            account_id: Some("ops@example.com".into()),
            error: CoreError::ConfigError("bad line".into()),
        };
        assert_eq!(
            failure.to_string(),
            "cloudflare account ops@example.com: Configuration error: bad line"
        );

        let provider_wide = RefreshFailure {
            provider: ProviderType::Ovh,
            account_id: None,
            error: CoreError::ConfigError("missing file".into()),
        };
        assert_eq!(
            provider_wide.to_string(),
            "ovh: Configuration error: missing file"
        );
    }

    #[test]
    fn record_serializes_provider_lowercase() {
        let record = DomainRecord {
            account_id: "1".into(),
            real_id: "billing-1".into(),
            provider: ProviderType::Dondominio,
            domain: "example.es".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["provider"], "dondominio");
        assert_eq!(json["realId"], "billing-1");
    }
}
