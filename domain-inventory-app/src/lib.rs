//! Application bootstrap for Domain Inventory.
//!
//! Provides `AppState` (service container) and the startup sequence that
//! decides whether the on-disk cache can be reused or must be rebuilt.

pub mod adapters;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use domain_inventory_core::DEFAULT_LOOKUP_TIMEOUT;
use domain_inventory_core::error::{CoreError, CoreResult};
use domain_inventory_core::services::{InventoryService, LookupService, ToolboxFallbackResolver};
use domain_inventory_core::traits::{AccountSource, FallbackResolver};
use domain_inventory_core::types::RefreshOutcome;

use adapters::{CredentialFileSource, SqliteStore};

/// Default cache database file.
pub const DEFAULT_DATABASE_PATH: &str = "domain_list.db";

/// Default credentials directory.
pub const DEFAULT_CONFIG_DIR: &str = "configs";

/// Startup options, filled from the command line.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub database_path: PathBuf,
    pub config_dir: PathBuf,
    /// SOCKS5 `host:port`, DonDominio only
    pub proxy_address: Option<String>,
    /// Force a rebuild even if the cache is populated
    pub regenerate: bool,
    pub lookup_timeout: Duration,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            proxy_address: None,
            regenerate: false,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }
}

/// How the cache came to be usable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Existing populated cache reused as is.
    Reused,
    /// No database file existed; created and refreshed.
    Created,
    /// `regenerate` requested; file deleted, recreated and refreshed.
    Regenerated,
    /// Database existed but was empty; refreshed.
    Repopulated,
}

/// Application state.
///
/// Holds the cache store and the services. Constructed once at startup via
/// [`AppState::bootstrap`].
pub struct AppState {
    /// Inventory cache service
    pub inventory_service: Arc<InventoryService>,
    /// Lookup with live fallback
    pub lookup_service: LookupService,
    /// What the startup sequence did with the cache
    pub cache_status: CacheStatus,
    /// Outcome of the startup refresh, if one ran
    pub refresh_outcome: Option<RefreshOutcome>,
}

impl AppState {
    /// Run the startup sequence with the credential files and live lookups.
    ///
    /// # Errors
    /// Storage failures, a cache that is still empty after a refresh, and a
    /// refresh in which any provider or account failed.
    pub async fn bootstrap(options: &BootstrapOptions) -> CoreResult<Self> {
        let accounts = Arc::new(CredentialFileSource::new(
            options.config_dir.clone(),
            options.proxy_address.clone(),
        ));
        let resolver = Arc::new(ToolboxFallbackResolver::new(options.lookup_timeout));
        Self::bootstrap_with(options, accounts, resolver).await
    }

    /// Startup sequence with injected collaborators.
    ///
    /// 1. No database file: create it and refresh.
    /// 2. `regenerate`: delete the file, recreate it and refresh.
    /// 3. Otherwise open it and refresh only if it holds no records.
    pub async fn bootstrap_with(
        options: &BootstrapOptions,
        accounts: Arc<dyn AccountSource>,
        resolver: Arc<dyn FallbackResolver>,
    ) -> CoreResult<Self> {
        let db_path = options.database_path.as_path();
        let exists = database_exists(db_path).await?;

        let planned = if !exists {
            log::info!("Database {} not found, creating it", db_path.display());
            Some(CacheStatus::Created)
        } else if options.regenerate {
            log::info!("Regenerating database {}", db_path.display());
            remove_database(db_path).await?;
            Some(CacheStatus::Regenerated)
        } else {
            log::info!("Database {} found", db_path.display());
            None
        };

        let store = Arc::new(SqliteStore::new(db_path).await?);
        let inventory_service = Arc::new(InventoryService::new(store, accounts));

        let cache_status = match planned {
            Some(status) => status,
            None if inventory_service.is_populated().await? => CacheStatus::Reused,
            None => {
                log::info!("Database is not populated");
                CacheStatus::Repopulated
            }
        };

        let refresh_outcome = if cache_status == CacheStatus::Reused {
            None
        } else {
            Some(refresh_and_verify(&inventory_service).await?)
        };

        let lookup_service = LookupService::new(Arc::clone(&inventory_service), resolver);

        Ok(Self {
            inventory_service,
            lookup_service,
            cache_status,
            refresh_outcome,
        })
    }
}

/// 刷新后缓存为空或有 Provider 失败都视为启动失败
///
/// 失败时已写入的记录保留在磁盘上，下次启动直接复用。
async fn refresh_and_verify(inventory: &InventoryService) -> CoreResult<RefreshOutcome> {
    let outcome = inventory.refresh().await?;

    if !inventory.is_populated().await? {
        return Err(CoreError::ConfigError(format!(
            "Inventory is empty after refresh ({} provider failure(s)); check the credential files",
            outcome.failures.len()
        )));
    }

    if !outcome.is_complete() {
        log::error!(
            "Partial refresh: {} failure(s), {} record(s) kept",
            outcome.failures.len(),
            outcome.total_inserted()
        );
        return Err(CoreError::RefreshIncomplete(outcome));
    }
    Ok(outcome)
}

async fn database_exists(path: &Path) -> CoreResult<bool> {
    tokio::fs::try_exists(path).await.map_err(|e| {
        CoreError::StorageError(format!("Failed to check {}: {e}", path.display()))
    })
}

async fn remove_database(path: &Path) -> CoreResult<()> {
    tokio::fs::remove_file(path).await.map_err(|e| {
        CoreError::StorageError(format!("Failed to remove {}: {e}", path.display()))
    })
}
