//! Live lookup abstract Trait

use async_trait::async_trait;

use crate::types::{FallbackResult, LookupError, WhoisInfo};

/// Live NS and WHOIS lookups used when the cache has no record.
#[async_trait]
pub trait FallbackResolver: Send + Sync {
    /// Authoritative name servers of `domain`.
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError>;

    /// WHOIS registration data of `domain`.
    async fn lookup_whois(&self, domain: &str) -> Result<WhoisInfo, LookupError>;

    /// Run both lookups concurrently; each failure stays in its own field.
    async fn resolve(&self, domain: &str) -> FallbackResult {
        let (ns_records, whois) =
            futures::join!(self.lookup_ns(domain), self.lookup_whois(domain));
        FallbackResult { ns_records, whois }
    }
}
