//! 域名清单缓存服务
//!
//! 刷新流程：建表 → 清空 → 各 Provider 并发拉取（同一 Provider 的账号顺序处理）→
//! 每个 Provider 的结果在写锁内一次性批量写入。

use std::sync::Arc;

use domain_inventory_provider::ProviderType;
use futures::future::join_all;
use tokio::sync::{Mutex, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountSource, InventoryStore};
use crate::types::{DomainRecord, InventoryAccount, RefreshFailure, RefreshOutcome};

/// 单个 Provider 的刷新结果
struct ProviderRefresh {
    provider: ProviderType,
    inserted: usize,
    failures: Vec<RefreshFailure>,
}

/// 域名清单缓存服务
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    accounts: Arc<dyn AccountSource>,
    /// refresh 独占，查询共享
    barrier: RwLock<()>,
    /// 串行化批量写入
    write_lock: Mutex<()>,
}

impl InventoryService {
    /// 创建缓存服务实例
    #[must_use]
    pub fn new(store: Arc<dyn InventoryStore>, accounts: Arc<dyn AccountSource>) -> Self {
        Self {
            store,
            accounts,
            barrier: RwLock::new(()),
            write_lock: Mutex::new(()),
        }
    }

    /// 重建缓存
    ///
    /// Provider / 账号级错误记录在 [`RefreshOutcome`] 中，不中断刷新；
    /// 存储错误直接返回 `Err`。
    pub async fn refresh(&self) -> CoreResult<RefreshOutcome> {
        let _guard = self.barrier.write().await;
        log::info!("Refreshing domain inventory");

        self.store.create_schema().await?;
        self.store.wipe().await?;

        let results = join_all(
            ProviderType::ALL
                .into_iter()
                .map(|provider| self.refresh_provider(provider)),
        )
        .await;

        let mut outcome = RefreshOutcome::default();
        for result in results {
            let refreshed = result?;
            outcome.inserted.insert(refreshed.provider, refreshed.inserted);
            outcome.failures.extend(refreshed.failures);
        }

        if outcome.is_complete() {
            log::info!(
                "Inventory refreshed: {} records",
                outcome.total_inserted()
            );
        } else {
            log::warn!(
                "Inventory refreshed with {} failure(s): {} records",
                outcome.failures.len(),
                outcome.total_inserted()
            );
        }
        Ok(outcome)
    }

    /// 拉取一个 Provider 的全部账号并写入
    async fn refresh_provider(&self, provider: ProviderType) -> CoreResult<ProviderRefresh> {
        let mut refreshed = ProviderRefresh {
            provider,
            inserted: 0,
            failures: Vec::new(),
        };

        let accounts = match self.accounts.load_accounts(provider).await {
            Ok(accounts) => accounts,
            Err(e) => {
                log_failure(provider, None, &e);
                refreshed.failures.push(RefreshFailure {
                    provider,
                    account_id: None,
                    error: e,
                });
                return Ok(refreshed);
            }
        };
        log::info!("[{provider}] {} account(s) configured", accounts.len());

        let mut records = Vec::new();
        for account in accounts {
            match fetch_account(provider, &account).await {
                Ok(mut fetched) => records.append(&mut fetched),
                Err(e) => {
                    log_failure(provider, Some(&account.account_id), &e);
                    refreshed.failures.push(RefreshFailure {
                        provider,
                        account_id: Some(account.account_id),
                        error: e,
                    });
                }
            }
        }

        {
            let _write = self.write_lock.lock().await;
            self.store.insert_batch(&records).await.inspect_err(|e| {
                log::error!("[{provider}] Failed to store {} records: {e}", records.len());
            })?;
        }

        refreshed.inserted = records.len();
        log::info!("[{provider}] {} domain(s) stored", refreshed.inserted);
        Ok(refreshed)
    }

    /// 缓存中是否有记录
    pub async fn is_populated(&self) -> CoreResult<bool> {
        let _guard = self.barrier.read().await;
        Ok(self.store.count().await? > 0)
    }

    /// 精确查询（区分大小写，不去除末尾的点）
    pub async fn lookup(&self, domain: &str) -> CoreResult<Vec<DomainRecord>> {
        let _guard = self.barrier.read().await;
        self.store.query_exact(domain).await
    }
}

/// 查询单个账号，空域名在写入前丢弃
async fn fetch_account(
    provider: ProviderType,
    account: &InventoryAccount,
) -> CoreResult<Vec<DomainRecord>> {
    log::info!("[{provider}] Listing domains of account {}", account.account_id);
    let names = account.gateway.list_domains().await?;

    Ok(names
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .map(|domain| DomainRecord {
            account_id: account.account_id.clone(),
            real_id: account.real_id.clone(),
            provider,
            domain,
        })
        .collect())
}

fn log_failure(provider: ProviderType, account_id: Option<&str>, error: &CoreError) {
    let scope = account_id.map_or_else(String::new, |id| format!(" account {id}"));
    if error.is_expected() {
        log::warn!("[{provider}]{scope} skipped: {error}");
    } else {
        log::error!("[{provider}]{scope} skipped: {error}");
    }
}
