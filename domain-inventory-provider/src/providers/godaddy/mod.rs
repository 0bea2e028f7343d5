//! GoDaddy domain-list gateway
//!
//! `GET /v1/domains` with an `Authorization: sso-key {key}:{secret}` header.
//! The endpoint pages by `marker` (last domain of the previous page).

mod error;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::{collect_domain_names, create_http_client};
use crate::traits::{DomainGateway, ProviderErrorMapper, RawApiError};
use crate::types::ProviderType;

const GODADDY_API_BASE: &str = "https://api.godaddy.com/v1";
/// 单页最大域名数
const PAGE_LIMIT: usize = 1000;

/// GoDaddy production API gateway
pub struct GodaddyGateway {
    client: Client,
    api_key: String,
    api_secret: String,
}

/// `/v1/domains` 列表项
#[derive(Debug, Deserialize)]
struct DomainSummary {
    domain: String,
}

/// GoDaddy 错误响应体
#[derive(Debug, Deserialize)]
struct GodaddyErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl GodaddyGateway {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn new(api_key: String, api_secret: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("godaddy", None)?,
            api_key,
            api_secret,
        })
    }

    fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }

    async fn fetch_page(&self, marker: Option<&str>) -> Result<Vec<DomainSummary>> {
        let mut url = format!("{GODADDY_API_BASE}/domains?limit={PAGE_LIMIT}");
        if let Some(marker) = marker {
            url.push_str("&marker=");
            url.push_str(marker);
        }

        let request = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json");

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error(error_from_body(&body, status)));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}

/// 解析非 2xx 响应体为 `RawApiError`
fn error_from_body(body: &str, status: u16) -> RawApiError {
    let parsed: Option<GodaddyErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = parsed.map_or((None, None), |b| (b.code, b.message));
    let message = message.unwrap_or_else(|| format!("HTTP {status}"));

    match code {
        Some(code) => RawApiError::with_code(code, message),
        None => RawApiError::new(message),
    }
    .status(status)
}

#[async_trait]
impl DomainGateway for GodaddyGateway {
    fn provider(&self) -> ProviderType {
        ProviderType::Godaddy
    }

    async fn list_domains(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let page = self.fetch_page(marker.as_deref()).await?;
            let returned = page.len();
            names.extend(page.into_iter().map(|d| d.domain));

            match next_marker(returned, names.last(), marker.as_ref()) {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        Ok(collect_domain_names(names))
    }
}

/// 下一页的 `marker`；页未满，或 API 忽略了 `marker` 返回同一页时为 `None`
fn next_marker(returned: usize, last: Option<&String>, previous: Option<&String>) -> Option<String> {
    if returned < PAGE_LIMIT {
        return None;
    }
    let last = last?;
    if previous == Some(last) {
        log::warn!("[godaddy] marker {last} did not advance, stopping pagination");
        return None;
    }
    Some(last.clone())
}
