//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use domain_inventory_provider::{DomainGateway, ProviderError, ProviderType};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountSource, FallbackResolver, InventoryStore};
use crate::types::{DomainRecord, InventoryAccount, LookupError, WhoisInfo};

// ===== MockInventoryStore =====

pub struct MockInventoryStore {
    records: RwLock<Vec<DomainRecord>>,
    /// 为 true 时 insert_batch 返回 StorageError
    fail_inserts: RwLock<bool>,
    /// 为 true 时 query_exact 返回 StorageError
    fail_queries: RwLock<bool>,
    /// insert_batch 在写入前等待的时间
    insert_delay: RwLock<Option<Duration>>,
    schema_calls: AtomicUsize,
    query_calls: AtomicUsize,
    active_inserts: AtomicUsize,
    peak_inserts: AtomicUsize,
}

impl MockInventoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail_inserts: RwLock::new(false),
            fail_queries: RwLock::new(false),
            insert_delay: RwLock::new(None),
            schema_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
            active_inserts: AtomicUsize::new(0),
            peak_inserts: AtomicUsize::new(0),
        }
    }

    pub async fn records(&self) -> Vec<DomainRecord> {
        self.records.read().await.clone()
    }

    pub async fn fail_inserts(&self, fail: bool) {
        *self.fail_inserts.write().await = fail;
    }

    pub async fn fail_queries(&self, fail: bool) {
        *self.fail_queries.write().await = fail;
    }

    pub async fn slow_inserts(&self, delay: Duration) {
        *self.insert_delay.write().await = Some(delay);
    }

    /// 同时进行中的 insert_batch 的最大数量
    pub fn peak_inserts(&self) -> usize {
        self.peak_inserts.load(Ordering::SeqCst)
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryStore for MockInventoryStore {
    async fn create_schema(&self) -> CoreResult<()> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn wipe(&self) -> CoreResult<()> {
        self.records.write().await.clear();
        Ok(())
    }

    async fn insert_batch(&self, records: &[DomainRecord]) -> CoreResult<()> {
        if *self.fail_inserts.read().await {
            return Err(CoreError::StorageError("disk I/O error".to_string()));
        }
        let active = self.active_inserts.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_inserts.fetch_max(active, Ordering::SeqCst);

        let delay = *self.insert_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.records.write().await.extend_from_slice(records);

        self.active_inserts.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }

    async fn count(&self) -> CoreResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn query_exact(&self, domain: &str) -> CoreResult<Vec<DomainRecord>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_queries.read().await {
            return Err(CoreError::StorageError("database is locked".to_string()));
        }
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.domain == domain)
            .cloned()
            .collect())
    }
}

// ===== MockGateway =====

pub struct MockGateway {
    provider: ProviderType,
    response: Result<Vec<String>, ProviderError>,
    delay: Option<Duration>,
}

impl MockGateway {
    pub fn ok(provider: ProviderType, domains: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            provider,
            response: Ok(domains.iter().map(ToString::to_string).collect()),
            delay: None,
        })
    }

    /// 等待 `delay` 后才返回域名列表
    pub fn slow(provider: ProviderType, domains: &[&str], delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            provider,
            response: Ok(domains.iter().map(ToString::to_string).collect()),
            delay: Some(delay),
        })
    }

    pub fn failing(provider: ProviderType, error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            provider,
            response: Err(error),
            delay: None,
        })
    }
}

#[async_trait]
impl DomainGateway for MockGateway {
    fn provider(&self) -> ProviderType {
        self.provider
    }

    async fn list_domains(&self) -> domain_inventory_provider::Result<Vec<String>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

/// 便捷构造账号
pub fn account(account_id: &str, real_id: &str, gateway: Arc<MockGateway>) -> InventoryAccount {
    InventoryAccount {
        account_id: account_id.to_string(),
        real_id: real_id.to_string(),
        gateway,
    }
}

// ===== MockAccountSource =====

/// 未设置的 Provider 视为没有配置任何账号
pub struct MockAccountSource {
    accounts: RwLock<HashMap<ProviderType, Result<Vec<InventoryAccount>, String>>>,
}

impl MockAccountSource {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub async fn set_accounts(&self, provider: ProviderType, accounts: Vec<InventoryAccount>) {
        self.accounts.write().await.insert(provider, Ok(accounts));
    }

    /// load_accounts 返回 ConfigError（模拟凭证文件缺失）
    pub async fn fail_provider(&self, provider: ProviderType, message: &str) {
        self.accounts
            .write()
            .await
            .insert(provider, Err(message.to_string()));
    }
}

#[async_trait]
impl AccountSource for MockAccountSource {
    async fn load_accounts(&self, provider: ProviderType) -> CoreResult<Vec<InventoryAccount>> {
        match self.accounts.read().await.get(&provider) {
            Some(Ok(accounts)) => Ok(accounts.clone()),
            Some(Err(message)) => Err(CoreError::ConfigError(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

// ===== CountingResolver =====

pub struct CountingResolver {
    ns: Result<Vec<String>, LookupError>,
    whois: Result<WhoisInfo, LookupError>,
    ns_calls: AtomicUsize,
    whois_calls: AtomicUsize,
    resolve_calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new(ns: Result<Vec<String>, LookupError>, whois: Result<WhoisInfo, LookupError>) -> Self {
        Self {
            ns,
            whois,
            ns_calls: AtomicUsize::new(0),
            whois_calls: AtomicUsize::new(0),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    pub fn healthy() -> Self {
        Self::new(
            Ok(vec!["ns1.example.net".to_string(), "ns2.example.net".to_string()]),
            Ok(Self::sample_whois("example.net")),
        )
    }

    pub fn sample_whois(domain: &str) -> WhoisInfo {
        WhoisInfo {
            domain: domain.to_string(),
            registrar: Some("Example Registrar".to_string()),
            creation_date: Some("2001-01-01T00:00:00Z".to_string()),
            expiration_date: Some("2031-01-01T00:00:00Z".to_string()),
            updated_date: None,
            name_servers: vec!["ns1.example.net".to_string()],
            status: vec!["clientTransferProhibited".to_string()],
            raw: String::new(),
        }
    }

    pub fn ns_calls(&self) -> usize {
        self.ns_calls.load(Ordering::SeqCst)
    }

    pub fn whois_calls(&self) -> usize {
        self.whois_calls.load(Ordering::SeqCst)
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FallbackResolver for CountingResolver {
    async fn lookup_ns(&self, _domain: &str) -> Result<Vec<String>, LookupError> {
        self.ns_calls.fetch_add(1, Ordering::SeqCst);
        self.ns.clone()
    }

    async fn lookup_whois(&self, _domain: &str) -> Result<WhoisInfo, LookupError> {
        self.whois_calls.fetch_add(1, Ordering::SeqCst);
        self.whois.clone()
    }

    async fn resolve(&self, domain: &str) -> crate::types::FallbackResult {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        let (ns_records, whois) = futures::join!(self.lookup_ns(domain), self.lookup_whois(domain));
        crate::types::FallbackResult { ns_records, whois }
    }
}
