#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the `AppState` startup sequence.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain_inventory_app::{AppState, BootstrapOptions, CacheStatus};
use domain_inventory_core::ProviderType;
use domain_inventory_core::error::{CoreError, CoreResult};
use domain_inventory_core::traits::{AccountSource, FallbackResolver};
use domain_inventory_core::types::{InventoryAccount, LookupError, LookupOutcome, WhoisInfo};
use domain_inventory_provider::{DomainGateway, ProviderError};
use tokio::sync::RwLock;

// ===== Mock Implementations =====

struct StaticGateway {
    provider: ProviderType,
    domains: Vec<String>,
}

#[async_trait]
impl DomainGateway for StaticGateway {
    fn provider(&self) -> ProviderType {
        self.provider
    }

    async fn list_domains(&self) -> domain_inventory_provider::Result<Vec<String>> {
        Ok(self.domains.clone())
    }
}

/// Accounts per provider; `load_accounts` calls are counted.
///
/// Providers never mentioned have no accounts; `None` means no credentials file.
struct MockAccountSource {
    domains: RwLock<HashMap<ProviderType, Option<Vec<String>>>>,
    loads: AtomicUsize,
}

impl MockAccountSource {
    fn new() -> Self {
        Self {
            domains: RwLock::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    async fn with_domains(self, provider: ProviderType, domains: &[&str]) -> Self {
        self.domains.write().await.insert(
            provider,
            Some(domains.iter().map(ToString::to_string).collect()),
        );
        self
    }

    async fn without_credentials(self, provider: ProviderType) -> Self {
        self.domains.write().await.insert(provider, None);
        self
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountSource for MockAccountSource {
    async fn load_accounts(&self, provider: ProviderType) -> CoreResult<Vec<InventoryAccount>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match self.domains.read().await.get(&provider) {
            Some(Some(domains)) => Ok(vec![InventoryAccount {
                account_id: format!("{provider}-1"),
                real_id: format!("{provider}-real"),
                gateway: Arc::new(StaticGateway {
                    provider,
                    domains: domains.clone(),
                }),
            }]),
            Some(None) => Err(CoreError::ConfigError(format!(
                "no credentials for {provider}"
            ))),
            None => Ok(Vec::new()),
        }
    }
}

struct OfflineResolver;

#[async_trait]
impl FallbackResolver for OfflineResolver {
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        Err(LookupError::NotFound(domain.to_string()))
    }

    async fn lookup_whois(&self, domain: &str) -> Result<WhoisInfo, LookupError> {
        Err(LookupError::NotFound(domain.to_string()))
    }
}

// ===== Helpers =====

fn options(db_path: &Path, regenerate: bool) -> BootstrapOptions {
    BootstrapOptions {
        database_path: db_path.to_path_buf(),
        regenerate,
        ..BootstrapOptions::default()
    }
}

async fn bootstrap(
    db_path: &Path,
    regenerate: bool,
    source: &Arc<MockAccountSource>,
) -> CoreResult<AppState> {
    AppState::bootstrap_with(
        &options(db_path, regenerate),
        source.clone(),
        Arc::new(OfflineResolver),
    )
    .await
}

// ===== Tests =====

#[tokio::test]
async fn missing_database_is_created_and_refreshed() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    let source = Arc::new(
        MockAccountSource::new()
            .with_domains(ProviderType::Ovh, &["example.com"])
            .await,
    );

    let state = bootstrap(&db_path, false, &source).await.unwrap();

    assert_eq!(state.cache_status, CacheStatus::Created);
    assert!(db_path.exists());
    let outcome = state.refresh_outcome.as_ref().unwrap();
    assert!(outcome.is_complete());
    assert_eq!(outcome.total_inserted(), 1);

    let found = state.lookup_service.lookup("example.com").await.unwrap();
    assert!(matches!(found, LookupOutcome::Found(ref records) if records.len() == 1));
}

#[tokio::test]
async fn populated_database_is_reused() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    let source = Arc::new(
        MockAccountSource::new()
            .with_domains(ProviderType::Cloudflare, &["example.org"])
            .await,
    );

    drop(bootstrap(&db_path, false, &source).await.unwrap());
    let loads_after_first = source.loads();

    let state = bootstrap(&db_path, false, &source).await.unwrap();

    assert_eq!(state.cache_status, CacheStatus::Reused);
    assert!(state.refresh_outcome.is_none());
    assert_eq!(source.loads(), loads_after_first);
}

#[tokio::test]
async fn regenerate_rebuilds_from_scratch() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    let first = Arc::new(
        MockAccountSource::new()
            .with_domains(ProviderType::Godaddy, &["old.io"])
            .await,
    );
    drop(bootstrap(&db_path, false, &first).await.unwrap());

    let second = Arc::new(
        MockAccountSource::new()
            .with_domains(ProviderType::Godaddy, &["new.io"])
            .await,
    );
    let state = bootstrap(&db_path, true, &second).await.unwrap();

    assert_eq!(state.cache_status, CacheStatus::Regenerated);
    let old = state.lookup_service.lookup("old.io").await.unwrap();
    assert!(matches!(old, LookupOutcome::NotFound(_)));
    let new = state.lookup_service.lookup("new.io").await.unwrap();
    assert!(matches!(new, LookupOutcome::Found(_)));
}

#[tokio::test]
async fn empty_database_is_repopulated() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    // 只有表结构，没有数据
    let store = domain_inventory_app::adapters::SqliteStore::new(&db_path)
        .await
        .unwrap();
    store.close().await.unwrap();

    let source = Arc::new(
        MockAccountSource::new()
            .with_domains(ProviderType::Dondominio, &["example.es"])
            .await,
    );
    let state = bootstrap(&db_path, false, &source).await.unwrap();

    assert_eq!(state.cache_status, CacheStatus::Repopulated);
    assert!(state.inventory_service.is_populated().await.unwrap());
}

#[tokio::test]
async fn empty_cache_after_refresh_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    let mut source = MockAccountSource::new();
    for provider in ProviderType::ALL {
        source = source.without_credentials(provider).await;
    }
    let source = Arc::new(source);

    let result = bootstrap(&db_path, false, &source).await;

    assert!(
        matches!(&result, Err(CoreError::ConfigError(m)) if m.contains("4 provider failure")),
        "unexpected result: {:?}",
        result.err()
    );
}

#[tokio::test]
async fn partial_refresh_fails_startup_but_keeps_records() {
    struct FailingGateway;

    #[async_trait]
    impl DomainGateway for FailingGateway {
        fn provider(&self) -> ProviderType {
            ProviderType::Ovh
        }

        async fn list_domains(&self) -> domain_inventory_provider::Result<Vec<String>> {
            Err(ProviderError::InvalidCredentials {
                provider: "ovh".to_string(),
                raw_message: None,
            })
        }
    }

    struct MixedSource;

    #[async_trait]
    impl AccountSource for MixedSource {
        async fn load_accounts(&self, provider: ProviderType) -> CoreResult<Vec<InventoryAccount>> {
            let gateway: Arc<dyn DomainGateway> = match provider {
                ProviderType::Ovh => Arc::new(FailingGateway),
                other => Arc::new(StaticGateway {
                    provider: other,
                    domains: vec![format!("{other}.example")],
                }),
            };
            Ok(vec![InventoryAccount {
                account_id: "acct".to_string(),
                real_id: "acct".to_string(),
                gateway,
            }])
        }
    }

    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("domain_list.db");
    let result = AppState::bootstrap_with(
        &options(&db_path, false),
        Arc::new(MixedSource),
        Arc::new(OfflineResolver),
    )
    .await;

    let outcome = match result {
        Err(CoreError::RefreshIncomplete(outcome)) => outcome,
        Err(e) => panic!("expected RefreshIncomplete, got {e:?}"),
        Ok(_) => panic!("expected RefreshIncomplete, got Ok"),
    };
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].provider, ProviderType::Ovh);
    assert_eq!(outcome.total_inserted(), 3);

    // 下次启动复用已写入的记录
    let source = Arc::new(MockAccountSource::new());
    let state = bootstrap(&db_path, false, &source).await.unwrap();
    assert_eq!(state.cache_status, CacheStatus::Reused);
    assert_eq!(source.loads(), 0);
    let found = state
        .lookup_service
        .lookup("cloudflare.example")
        .await
        .unwrap();
    assert!(matches!(found, LookupOutcome::Found(_)));
}
