//! `InventoryStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use domain_inventory_core::ProviderType;
use domain_inventory_core::error::{CoreError, CoreResult};
use domain_inventory_core::traits::InventoryStore;
use domain_inventory_core::types::DomainRecord;

use super::SqliteStore;
use super::entity::domain_list;

/// Rows per INSERT statement, keeps bound parameters under the `SQLite` limit.
const INSERT_CHUNK_SIZE: usize = 500;

impl domain_list::Model {
    /// Convert a `SeaORM` row model into a `DomainRecord`.
    fn into_record(self) -> CoreResult<DomainRecord> {
        let provider = self.provider.parse::<ProviderType>().map_err(|e| {
            CoreError::StorageError(format!("Invalid provider in row {}: {e}", self.row_id))
        })?;

        Ok(DomainRecord {
            account_id: self.id,
            real_id: self.real_id,
            provider,
            domain: self.domain,
        })
    }
}

fn record_to_active_model(record: &DomainRecord) -> domain_list::ActiveModel {
    domain_list::ActiveModel {
        row_id: NotSet,
        id: Set(record.account_id.clone()),
        real_id: Set(record.real_id.clone()),
        provider: Set(record.provider.as_str().to_string()),
        domain: Set(record.domain.clone()),
    }
}

#[async_trait]
impl InventoryStore for SqliteStore {
    async fn create_schema(&self) -> CoreResult<()> {
        self.migrate().await
    }

    async fn wipe(&self) -> CoreResult<()> {
        let result = domain_list::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to wipe domain_list: {e}")))?;

        log::debug!("Wiped {} cached record(s)", result.rows_affected);
        Ok(())
    }

    async fn insert_batch(&self, records: &[DomainRecord]) -> CoreResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to begin transaction: {e}")))?;

        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            domain_list::Entity::insert_many(chunk.iter().map(record_to_active_model))
                .exec(&txn)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to insert records: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to commit records: {e}")))?;

        log::debug!("Inserted {} record(s)", records.len());
        Ok(())
    }

    async fn count(&self) -> CoreResult<u64> {
        domain_list::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to count records: {e}")))
    }

    async fn query_exact(&self, domain: &str) -> CoreResult<Vec<DomainRecord>> {
        let rows = domain_list::Entity::find()
            .filter(domain_list::Column::Domain.eq(domain))
            .order_by_asc(domain_list::Column::RowId)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domain_list: {e}")))?;

        rows.into_iter().map(domain_list::Model::into_record).collect()
    }
}
