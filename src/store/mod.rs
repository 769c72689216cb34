//! Persistence accessor for the `products` collection.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::database;
use crate::models::product::{NewProduct, Product, ProductChanges};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One single-document operation per method; no multi-record transactions.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// Assigns the identifier and timestamps.
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Returns `None` when no product has this identifier.
    async fn update(&self, id: Uuid, changes: ProductChanges) -> Result<Option<Product>, StoreError>;

    /// Returns whether a product was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Opens the configured store. Postgres is connected and migrated before this
/// returns, so an unreachable database fails startup.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn ProductStore>, StoreError> {
    match config {
        StorageConfig::Postgres { url, max_connections } => {
            let pool = database::create_pool(url, *max_connections).await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(PgProductStore::new(pool)))
        }
        StorageConfig::Memory => {
            tracing::warn!("using in-memory product store, data is lost on exit");
            Ok(Arc::new(MemoryProductStore::new()))
        }
    }
}
