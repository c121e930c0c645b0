//! User record storage
//!
//! Provides a unified interface over PostgreSQL and an in-process map

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::UserRecord;
use crate::Result;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Persistence for user records, keyed by username.
///
/// `exists` followed by `create` is not atomic; a concurrent create for the
/// same username fails with [`crate::Error::UserExists`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Check if a record exists for `username`
    async fn exists(&self, username: &str) -> Result<bool>;

    /// Fetch the record for `username`
    async fn get(&self, username: &str) -> Result<UserRecord>;

    /// Insert a new record, failing if `username` is taken
    async fn create(&self, username: &str, date_of_birth: NaiveDate) -> Result<UserRecord>;

    /// Replace the date of birth of an existing record
    async fn update(&self, username: &str, date_of_birth: NaiveDate) -> Result<()>;

    /// Verify the backend is reachable
    async fn ping(&self) -> Result<()>;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Postgres {
        host: String,
        user: String,
        password: String,
        database: String,
        max_connections: u32,
    },
    Memory,
}

/// Create storage backend from config
pub async fn create_storage(config: StorageConfig) -> Result<Arc<dyn UserStore>> {
    match config {
        StorageConfig::Postgres {
            host,
            user,
            password,
            database,
            max_connections,
        } => {
            let store =
                PostgresStore::connect(&host, &user, &password, &database, max_connections)
                    .await?;
            Ok(Arc::new(store))
        }
        StorageConfig::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
