//! Cloudflare zone-list gateway

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;

/// Cloudflare gateway authenticated with a global API key
pub struct CloudflareGateway {
    pub(crate) client: Client,
    pub(crate) email: String,
    pub(crate) api_key: String,
}

impl CloudflareGateway {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn new(email: String, api_key: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cloudflare", None)?,
            email,
            api_key,
        })
    }
}
