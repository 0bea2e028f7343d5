//! Stateless service façade exposing the toolbox lookups.
//!
//! Every method on [`ToolboxService`] is an async associated function; no instance needed.

mod ns;
mod resolver;
mod whois;

use std::future::Future;
use std::time::Duration;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::{NsLookupResult, WhoisResult};

/// Timeout applied to a single live lookup when the caller has no preference.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Embedded WHOIS server mapping (TLD → server).
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

/// Same ceiling as the inventory name validator.
const MAX_DOMAIN_LENGTH: usize = 255;

/// Normalise a domain name before it goes on the wire.
///
/// Trims whitespace and a single trailing root dot, and rejects empty,
/// overlong or whitespace-containing inputs. Full syntax checking is the
/// caller's job.
fn validate_domain(domain: &str) -> ToolboxResult<String> {
    let domain = domain.trim();
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return Err(ToolboxError::ValidationError(
            "Domain name is required".to_string(),
        ));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(ToolboxError::ValidationError(format!(
            "Invalid domain name: {domain}"
        )));
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(ToolboxError::ValidationError(format!(
            "Domain name exceeds maximum length of {MAX_DOMAIN_LENGTH} characters (got {})",
            domain.len()
        )));
    }
    Ok(domain.to_string())
}

/// Run `fut` with a deadline, mapping expiry to [`ToolboxError::Timeout`].
async fn with_timeout<T>(
    timeout: Duration,
    fut: impl Future<Output = ToolboxResult<T>>,
) -> ToolboxResult<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .unwrap_or(Err(ToolboxError::Timeout(timeout.as_secs())))
}

/// Entry point for the live lookups.
///
/// ```rust,no_run
/// use domain_inventory_toolbox::{DEFAULT_LOOKUP_TIMEOUT, ToolboxService};
/// # async fn demo() -> domain_inventory_toolbox::ToolboxResult<()> {
/// let ns = ToolboxService::ns_lookup("example.com", DEFAULT_LOOKUP_TIMEOUT).await?;
/// println!("{:?}", ns.records);
/// # Ok(())
/// # }
/// ```
pub struct ToolboxService;

impl ToolboxService {
    /// Resolve the NS records of a domain with the system resolver.
    ///
    /// NXDOMAIN and empty answers are reported as [`ToolboxError::NotFound`].
    pub async fn ns_lookup(domain: &str, timeout: Duration) -> ToolboxResult<NsLookupResult> {
        let domain = validate_domain(domain)?;
        with_timeout(timeout, ns::ns_lookup(&domain)).await
    }

    /// Query WHOIS information for a domain.
    ///
    /// Returns structured registration data (registrar, dates, name servers, status)
    /// parsed from the raw WHOIS response.
    pub async fn whois_lookup(domain: &str, timeout: Duration) -> ToolboxResult<WhoisResult> {
        let domain = validate_domain(domain)?;
        with_timeout(timeout, whois::whois_lookup(&domain, WHOIS_SERVERS, timeout)).await
    }
}
