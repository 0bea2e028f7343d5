//! GoDaddy error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::GodaddyGateway;

/// Reference: <https://developer.godaddy.com/doc/endpoint/domains#/v1/list>
impl ProviderErrorMapper for GodaddyGateway {
    fn provider_name(&self) -> &'static str {
        "godaddy"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            Some("UNABLE_TO_AUTHENTICATE" | "MALFORMED_CREDENTIALS") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }
            // 账号未达到 API 使用门槛时同样返回 ACCESS_DENIED
            Some("ACCESS_DENIED" | "NOT_AUTHORIZED") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("TOO_MANY_REQUESTS") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },
            _ => self.map_http_status(raw),
        }
    }
}
