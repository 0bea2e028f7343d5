//! Gateway 公共工具函数

use std::time::Duration;

use reqwest::{Client, Proxy};

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// `socks5_proxy` 为 `host:port` 形式时，所有请求经由该 SOCKS5 代理发出
/// （远端 DNS 解析，即 `socks5h`）。
pub fn create_http_client(provider: &str, socks5_proxy: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

    if let Some(address) = socks5_proxy {
        let proxy = Proxy::all(socks5_url(address)).map_err(|e| {
            ProviderError::InvalidConfiguration {
                provider: provider.to_string(),
                detail: format!("Invalid SOCKS5 proxy address '{address}': {e}"),
            }
        })?;
        log::debug!("[{provider}] Routing requests through SOCKS5 proxy {address}");
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ProviderError::InvalidConfiguration {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// 代理地址规范化：裸 `host:port` 补全为 `socks5h://host:port`
fn socks5_url(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("socks5h://{address}")
    }
}

// ============ 域名名称处理 ============

/// 清理 API 返回的域名列表：去掉首尾空白，丢弃空名称
pub fn collect_domain_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
