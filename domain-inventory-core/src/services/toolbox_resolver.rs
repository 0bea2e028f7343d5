//! Toolbox 实现的实时回退查询

use std::time::Duration;

use async_trait::async_trait;
use domain_inventory_toolbox::{DEFAULT_LOOKUP_TIMEOUT, ToolboxService};

use crate::traits::FallbackResolver;
use crate::types::{LookupError, WhoisInfo};

/// [`FallbackResolver`] backed by the system DNS resolver and public WHOIS servers.
///
/// Each lookup is a single attempt bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct ToolboxFallbackResolver {
    timeout: Duration,
}

impl ToolboxFallbackResolver {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ToolboxFallbackResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_TIMEOUT)
    }
}

#[async_trait]
impl FallbackResolver for ToolboxFallbackResolver {
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        ToolboxService::ns_lookup(domain, self.timeout)
            .await
            .map(|result| result.records)
    }

    async fn lookup_whois(&self, domain: &str) -> Result<WhoisInfo, LookupError> {
        ToolboxService::whois_lookup(domain, self.timeout).await
    }
}
