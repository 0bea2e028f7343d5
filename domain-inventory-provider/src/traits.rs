use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::ProviderType;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
    /// HTTP 状态码（若可用）
    pub status: Option<u16>,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Gateway 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> ProviderError;

    /// 快捷方法：按 HTTP 状态码做通用映射（401/403），否则 fallback 为未知错误
    fn map_http_status(&self, raw: RawApiError) -> ProviderError {
        match raw.status {
            Some(401) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some(403) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Domain-list gateway for one authenticated provider account.
///
/// A gateway is bound to one set of credentials at construction time and
/// answers a single question: which domains does this account own. Paging,
/// signing and transport details stay inside the implementation.
#[async_trait]
pub trait DomainGateway: Send + Sync {
    /// Provider this gateway talks to.
    fn provider(&self) -> ProviderType;

    /// List every domain name owned by the account, case as returned by the API.
    async fn list_domains(&self) -> Result<Vec<String>>;
}
