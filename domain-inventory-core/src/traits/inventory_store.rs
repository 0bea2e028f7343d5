//! Inventory persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::DomainRecord;

/// Inventory cache storage Trait
///
/// Platform implementation:
/// - `SqliteStore` (`SeaORM`, table `domain_list`)
///
/// Every method reports failures as [`CoreError::StorageError`](crate::CoreError::StorageError).
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Create the table and index if missing. Idempotent.
    async fn create_schema(&self) -> CoreResult<()>;

    /// Delete every record.
    async fn wipe(&self) -> CoreResult<()>;

    /// Append records atomically: either all rows are written or none.
    ///
    /// # Arguments
    /// * `records` - Records to append; an empty slice is a no-op
    async fn insert_batch(&self, records: &[DomainRecord]) -> CoreResult<()>;

    /// Number of stored records.
    async fn count(&self) -> CoreResult<u64>;

    /// Records whose domain equals `domain` exactly (case-sensitive).
    ///
    /// # Arguments
    /// * `domain` - Domain name as typed by the operator
    async fn query_exact(&self, domain: &str) -> CoreResult<Vec<DomainRecord>>;
}
