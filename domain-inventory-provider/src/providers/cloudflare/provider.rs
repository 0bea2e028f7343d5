//! Cloudflare DomainGateway trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::collect_domain_names;
use crate::traits::DomainGateway;
use crate::types::ProviderType;

use super::{CloudflareGateway, CloudflareZone};

#[async_trait]
impl DomainGateway for CloudflareGateway {
    fn provider(&self) -> ProviderType {
        ProviderType::Cloudflare
    }

    /// 逐页拉取 `/zones`，直到 `result_info.total_pages`
    async fn list_domains(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1;

        loop {
            let (zones, total_pages): (Vec<CloudflareZone>, u32) =
                self.get_page("/zones", page).await?;
            let returned = zones.len();
            names.extend(zones.into_iter().map(|zone| zone.name));

            if !has_next_page(page, total_pages, returned) {
                break;
            }
            page += 1;
        }

        log::debug!("[cloudflare] {} zones for {}", names.len(), self.email);
        Ok(collect_domain_names(names))
    }
}

/// 空页或已到 `total_pages` 时停止
fn has_next_page(page: u32, total_pages: u32, returned: usize) -> bool {
    returned > 0 && page < total_pages
}
