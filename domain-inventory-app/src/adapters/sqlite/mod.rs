//! SQLite-based inventory cache using `SeaORM`.
//!
//! A single `domain_list` table holds one row per (account, domain) pair.
//! The table is rebuilt wholesale on every refresh.

mod entity;
mod inventory_store;
mod migration;

use std::path::Path;

use domain_inventory_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-backed [`InventoryStore`](domain_inventory_core::traits::InventoryStore).
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Open (or create) the `SQLite` database at `db_path`.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };
        store.migrate().await?;
        Ok(store)
    }

    /// Bring the schema up to date. Idempotent.
    pub(crate) async fn migrate(&self) -> CoreResult<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))
    }

    /// Close the underlying connection pool.
    pub async fn close(self) -> CoreResult<()> {
        self.db
            .close()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to close SQLite: {e}")))
    }
}
