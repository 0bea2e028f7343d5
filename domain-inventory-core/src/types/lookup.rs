//! Lookup result types

use domain_inventory_toolbox::{ToolboxError, WhoisResult};

use crate::types::DomainRecord;
use crate::validation::SyntaxError;

/// Failure of one live lookup.
pub type LookupError = ToolboxError;

/// Parsed WHOIS registration data.
pub type WhoisInfo = WhoisResult;

/// Live NS and WHOIS answers for a domain missing from the cache.
///
/// Each field fails independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResult {
    pub ns_records: Result<Vec<String>, LookupError>,
    pub whois: Result<WhoisInfo, LookupError>,
}

/// What a lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Input failed validation; neither the cache nor the network was touched.
    Rejected(SyntaxError),
    /// Cached records for the domain, in storage order.
    Found(Vec<DomainRecord>),
    /// Not cached; live lookup results.
    NotFound(FallbackResult),
}

impl LookupOutcome {
    /// Short machine-readable tag, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Found(_) => "found",
            Self::NotFound(_) => "not_found",
        }
    }
}
