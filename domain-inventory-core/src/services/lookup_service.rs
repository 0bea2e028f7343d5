//! 域名查询服务：校验 → 缓存 → 实时回退

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::InventoryService;
use crate::traits::FallbackResolver;
use crate::types::LookupOutcome;
use crate::validation::ValidatedDomainName;

/// 域名查询服务
pub struct LookupService {
    inventory: Arc<InventoryService>,
    resolver: Arc<dyn FallbackResolver>,
}

impl LookupService {
    /// 创建查询服务实例
    #[must_use]
    pub fn new(inventory: Arc<InventoryService>, resolver: Arc<dyn FallbackResolver>) -> Self {
        Self {
            inventory,
            resolver,
        }
    }

    /// 查询一个域名
    ///
    /// 输入按原始字节校验；校验失败不访问缓存和网络。
    /// 只有存储错误会返回 `Err`。
    pub async fn lookup(&self, input: impl AsRef<[u8]>) -> CoreResult<LookupOutcome> {
        let outcome = self.classify(input.as_ref()).await?;
        log::debug!("Lookup finished: {}", outcome.kind());
        Ok(outcome)
    }

    async fn classify(&self, input: &[u8]) -> CoreResult<LookupOutcome> {
        let domain = match ValidatedDomainName::parse_bytes(input) {
            Ok(domain) => domain,
            Err(e) => {
                log::debug!("Rejected input: {e}");
                return Ok(LookupOutcome::Rejected(e));
            }
        };

        let records = self.inventory.lookup(domain.as_str()).await?;
        if !records.is_empty() {
            log::debug!("{domain}: {} cached record(s)", records.len());
            return Ok(LookupOutcome::Found(records));
        }

        log::info!("{domain} not in inventory, running live lookups");
        let fallback = self.resolver.resolve(domain.as_str()).await;
        if let Err(e) = &fallback.ns_records {
            log::warn!("{domain}: NS lookup unavailable: {e}");
        }
        if let Err(e) = &fallback.whois {
            log::warn!("{domain}: WHOIS lookup unavailable: {e}");
        }
        Ok(LookupOutcome::NotFound(fallback))
    }
}
