//! DonDominio domain-list gateway
//!
//! `POST /domain/list/` on the simple API with `apiuser` / `apipasswd` form
//! fields. DonDominio whitelists API callers by source IP, so the gateway can
//! route its requests through a SOCKS5 proxy.

mod error;
mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::{collect_domain_names, create_http_client};
use crate::traits::{DomainGateway, ProviderErrorMapper, RawApiError};
use crate::types::ProviderType;

use types::{DondominioResponse, DomainListData};

const DONDOMINIO_API_BASE: &str = "https://simple-api.dondominio.net";
/// 单页最大域名数
const PAGE_LENGTH: u32 = 1000;

/// DonDominio simple-API gateway
pub struct DondominioGateway {
    client: Client,
    username: String,
    password: String,
}

impl DondominioGateway {
    /// `socks5_proxy` is a `host:port` address; `None` connects directly.
    ///
    /// # Errors
    ///
    /// Fails when the proxy address is malformed or the HTTP client cannot be built.
    pub fn new(username: String, password: String, socks5_proxy: Option<&str>) -> Result<Self> {
        Ok(Self {
            client: create_http_client("dondominio", socks5_proxy)?,
            username,
            password,
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<DomainListData> {
        let url = format!("{DONDOMINIO_API_BASE}/domain/list/");
        let page = page.to_string();
        let page_length = PAGE_LENGTH.to_string();
        let form = [
            ("apiuser", self.username.as_str()),
            ("apipasswd", self.password.as_str()),
            ("page", page.as_str()),
            ("pageLength", page_length.as_str()),
        ];

        let request = self.client.post(&url).form(&form);
        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.parse_response(&body, status)
    }

    /// 解析响应；`success == false` 映射为 `ProviderError`
    fn parse_response(&self, body: &str, status: u16) -> Result<DomainListData> {
        let response: DondominioResponse = HttpUtils::parse_json(body, self.provider_name())?;

        if !response.success {
            log::error!(
                "[dondominio] API error {}: {}",
                response.error_code,
                response.error_code_msg
            );
            return Err(self.map_error(
                RawApiError::with_code(response.error_code.to_string(), response.error_code_msg)
                    .status(status),
            ));
        }

        Ok(response.response_data.unwrap_or_default())
    }
}

#[async_trait]
impl DomainGateway for DondominioGateway {
    fn provider(&self) -> ProviderType {
        ProviderType::Dondominio
    }

    async fn list_domains(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1;

        loop {
            let data = self.fetch_page(page).await?;
            let returned = data.domains.len();
            names.extend(data.domains.into_iter().map(|d| d.name));

            let total = data.query_info.map_or(0, |q| q.total);
            if !has_more(names.len(), returned, total) {
                break;
            }
            page += 1;
        }

        Ok(collect_domain_names(names))
    }
}

/// `queryInfo.total` 是全部页的总数
fn has_more(collected: usize, returned: usize, total: usize) -> bool {
    returned > 0 && collected < total
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    fn gateway() -> DondominioGateway {
        DondominioGateway::new("user".into(), "pass".into(), None).unwrap()
    }

    #[test]
    fn parses_successful_listing() {
        let body = r#"{
            "success": true,
            "errorCode": 0,
            "errorCodeMsg": "",
            "action": "domain/list",
            "version": "1.0.20",
            "responseData": {
                "queryInfo": {"page": 1, "pageLength": 1000, "results": 2, "total": 2},
                "domains": [
                    {"name": "example.es", "status": "active", "tld": "es", "domainID": 11, "tsExpir": "2027-01-01"},
                    {"name": "example.cat", "status": "active", "tld": "cat", "domainID": 12, "tsExpir": "2027-02-01"}
                ]
            }
        }"#;
        let data = gateway().parse_response(body, 200).unwrap();
        let names: Vec<_> = data.domains.into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["example.es", "example.cat"]);
        assert_eq!(data.query_info.unwrap().total, 2);
    }

    #[test]
    fn unsuccessful_response_is_mapped() {
        let body = r#"{
            "success": false,
            "errorCode": 1001,
            "errorCodeMsg": "Login failed",
            "action": "domain/list",
            "version": "1.0.20",
            "responseData": []
        }"#;
        let err = gateway().parse_response(body, 200).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn garbage_body_is_parse_error() {
        let err = gateway().parse_response("<html>", 200).unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }

    #[test]
    fn pages_until_total_is_reached() {
        assert!(has_more(1000, 1000, 2500));
        assert!(has_more(2000, 1000, 2500));
        assert!(!has_more(2500, 500, 2500));
    }

    #[test]
    fn stops_on_empty_page_or_missing_total() {
        assert!(!has_more(1000, 0, 2500));
        assert!(!has_more(1000, 1000, 0));
    }

    #[test]
    fn builds_with_proxy() {
        assert!(DondominioGateway::new("u".into(), "p".into(), Some("10.0.0.1:1080")).is_ok());
    }
}
