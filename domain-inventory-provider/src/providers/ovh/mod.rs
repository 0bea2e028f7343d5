//! OVH domain-list gateway (`ovh-eu` endpoint)

mod error;
mod sign;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::{collect_domain_names, create_http_client};
use crate::traits::{DomainGateway, ProviderErrorMapper, RawApiError};
use crate::types::ProviderType;

use sign::sign_request;

pub(crate) const OVH_API_BASE: &str = "https://eu.api.ovh.com/1.0";

/// OVH gateway bound to one application / consumer key pair
pub struct OvhGateway {
    client: Client,
    app_key: String,
    app_secret: String,
    consumer_key: String,
}

/// OVH 错误响应体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OvhErrorBody {
    error_code: Option<String>,
    message: Option<String>,
}

impl OvhGateway {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn new(app_key: String, app_secret: String, consumer_key: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("ovh", None)?,
            app_key,
            app_secret,
            consumer_key,
        })
    }

    /// 服务器时间，签名必须使用 OVH 的时钟；不可用时退回本地时间
    async fn server_time(&self) -> i64 {
        let url = format!("{OVH_API_BASE}/auth/time");
        match HttpUtils::execute_request(self.client.get(&url), "ovh", "GET", &url).await {
            Ok((200, body)) => body
                .trim()
                .parse::<i64>()
                .unwrap_or_else(|_| chrono::Utc::now().timestamp()),
            Ok((status, _)) => {
                log::warn!("[ovh] /auth/time returned HTTP {status}, using local clock");
                chrono::Utc::now().timestamp()
            }
            Err(e) => {
                log::warn!("[ovh] /auth/time failed ({e}), using local clock");
                chrono::Utc::now().timestamp()
            }
        }
    }

    /// 执行签名 GET 请求
    async fn signed_get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{OVH_API_BASE}{path}");
        let timestamp = self.server_time().await;
        let signature = sign_request(
            &self.app_secret,
            &self.consumer_key,
            "GET",
            &url,
            "",
            timestamp,
        );

        let request = self
            .client
            .get(&url)
            .header("X-Ovh-Application", &self.app_key)
            .header("X-Ovh-Consumer", &self.consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature);

        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error(error_from_body(&body, status)));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}

fn error_from_body(body: &str, status: u16) -> RawApiError {
    let parsed: Option<OvhErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = parsed.map_or((None, None), |b| (b.error_code, b.message));
    let message = message.unwrap_or_else(|| format!("HTTP {status}"));

    match code {
        Some(code) => RawApiError::with_code(code, message),
        None => RawApiError::new(message),
    }
    .status(status)
}

#[async_trait]
impl DomainGateway for OvhGateway {
    fn provider(&self) -> ProviderType {
        ProviderType::Ovh
    }

    async fn list_domains(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self.signed_get("/domain").await?;
        Ok(collect_domain_names(names))
    }
}
