//! OVH error mapping

use crate::error::ProviderError;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::OvhGateway;

impl ProviderErrorMapper for OvhGateway {
    fn provider_name(&self) -> &'static str {
        "ovh"
    }

    fn map_error(&self, raw: RawApiError) -> ProviderError {
        match raw.code.as_deref() {
            Some("INVALID_CREDENTIAL" | "NOT_CREDENTIAL" | "INVALID_KEY" | "INVALID_SIGNATURE") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }
            Some("QUERY_TIME_OUT") => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },
            _ => match raw.status {
                // "Invalid application key"
                Some(400) if raw.message.to_lowercase().contains("application key") => {
                    ProviderError::InvalidCredentials {
                        provider: self.provider_name().to_string(),
                        raw_message: Some(raw.message),
                    }
                }
                _ => self.map_http_status(raw),
            },
        }
    }
}
