//! DonDominio error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::DondominioGateway;

/// Reference: <https://dev.dondominio.com/api/docs/api/#error-codes>
impl ProviderErrorMapper for DondominioGateway {
    fn provider_name(&self) -> &'static str {
        "dondominio"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            // 1000: Login required
            // 1001: Login failed
            // 1002: Session invalid
            Some("1000" | "1001" | "1002") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            // 1003: Account blocked
            // 1004: Account inactive
            // 1005: IP not allowed (API whitelist)
            // 1006: Restricted area
            Some("1003" | "1004" | "1005" | "1006") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            _ => self.map_http_status(raw),
        }
    }
}
