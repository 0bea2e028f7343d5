//! Public types returned by toolbox operations.

use serde::{Deserialize, Serialize};

/// NS lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NsLookupResult {
    /// The queried domain name.
    pub domain: String,
    /// Authoritative name servers, without the trailing root dot.
    pub records: Vec<String>,
}

/// WHOIS query result with parsed registration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisResult {
    /// The queried domain name.
    pub domain: String,
    /// Domain registrar.
    pub registrar: Option<String>,
    /// Registration creation date.
    pub creation_date: Option<String>,
    /// Registration expiration date.
    pub expiration_date: Option<String>,
    /// Last updated date.
    pub updated_date: Option<String>,
    /// Name servers listed in the registration.
    pub name_servers: Vec<String>,
    /// EPP status codes.
    pub status: Vec<String>,
    /// Raw WHOIS response text.
    pub raw: String,
}

impl WhoisResult {
    /// `true` when none of the structured fields could be parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.updated_date.is_none()
            && self.name_servers.is_empty()
            && self.status.is_empty()
    }
}
