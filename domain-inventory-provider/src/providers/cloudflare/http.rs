//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareGateway, CloudflareResponse, MAX_PAGE_SIZE_ZONES};

impl CloudflareGateway {
    /// 执行 GET 请求 (带分页)，返回当前页数据与总页数
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> Result<(Vec<T>, u32)> {
        let url = format!("{CF_API_BASE}{path}?page={page}&per_page={MAX_PAGE_SIZE_ZONES}");

        let request = self
            .client
            .get(&url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.api_key);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        let cf_response: CloudflareResponse<Vec<T>> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        check_success(self, &cf_response, status)?;

        let total_pages = cf_response
            .result_info
            .as_ref()
            .map_or(page, |info| info.total_pages.max(info.page));
        let items = cf_response.result.unwrap_or_default();

        Ok((items, total_pages))
    }
}

/// `success == false` 时取第一条错误映射为 `ProviderError`
fn check_success<T>(
    gateway: &CloudflareGateway,
    response: &CloudflareResponse<T>,
    status: u16,
) -> Result<()> {
    if response.success {
        return Ok(());
    }

    let (code, message) = response
        .errors
        .as_ref()
        .and_then(|errors| errors.first())
        .map_or_else(
            || (String::new(), "Unknown error".to_string()),
            |e| (e.code.to_string(), e.message.clone()),
        );
    log::error!("[cloudflare] API error {code}: {message}");
    Err(gateway.map_error(RawApiError::with_code(code, message).status(status)))
}
