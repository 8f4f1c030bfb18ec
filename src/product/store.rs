//! Persistence engines for product rows.
//!
//! # Responsibilities
//! - Expose the four row operations the service needs
//! - Assign ids on insert
//! - Provide per-row atomicity (each operation is a single statement)
//!
//! # Design Decisions
//! - `save` inserts when the id is unset and overwrites the row otherwise
//! - No transactions span more than one row
//! - The in-memory engine mirrors SQLite id semantics (starts at 1, never reused)

use dashmap::DashMap;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::observability::metrics;
use crate::product::model::{ProductEntity, ProductId};

/// Errors raised by a store engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver or connection failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update or delete targeted a row that is not there.
    #[error("Row {0} does not exist")]
    MissingRow(ProductId),

    /// A record reached `delete` without an id.
    #[error("Record has no id")]
    MissingId,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Row-level access to the product table.
pub trait ProductStore: Send + Sync + 'static {
    /// All rows, in whatever order the engine returns them.
    fn find_all(&self) -> impl Future<Output = StoreResult<Vec<ProductEntity>>> + Send;

    fn find_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = StoreResult<Option<ProductEntity>>> + Send;

    /// Insert (id unset) or overwrite (id set). Returns the stored record with its id.
    fn save(&self, record: ProductEntity) -> impl Future<Output = StoreResult<ProductEntity>> + Send;

    fn delete(&self, record: &ProductEntity) -> impl Future<Output = StoreResult<()>> + Send;
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS product (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL
)";

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Database pool opened"
        );
        Ok(Self::new(pool))
    }

    /// Create the `product` table if it does not exist.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

impl ProductStore for SqliteProductStore {
    async fn find_all(&self) -> StoreResult<Vec<ProductEntity>> {
        metrics::record_store_operation("find_all");
        let rows = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price FROM product",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<ProductEntity>> {
        metrics::record_store_operation("find_by_id");
        let row = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, mut record: ProductEntity) -> StoreResult<ProductEntity> {
        match record.id {
            None => {
                metrics::record_store_operation("insert");
                let result =
                    sqlx::query("INSERT INTO product (name, description, price) VALUES (?, ?, ?)")
                        .bind(&record.name)
                        .bind(&record.description)
                        .bind(record.price)
                        .execute(&self.pool)
                        .await?;
                record.id = Some(result.last_insert_rowid());
            }
            Some(id) => {
                metrics::record_store_operation("update");
                let result = sqlx::query(
                    "UPDATE product SET name = ?, description = ?, price = ? WHERE id = ?",
                )
                .bind(&record.name)
                .bind(&record.description)
                .bind(record.price)
                .bind(id)
                .execute(&self.pool)
                .await?;
                if result.rows_affected() == 0 {
                    return Err(StoreError::MissingRow(id));
                }
            }
        }
        Ok(record)
    }

    async fn delete(&self, record: &ProductEntity) -> StoreResult<()> {
        metrics::record_store_operation("delete");
        let id = record.id.ok_or(StoreError::MissingId)?;
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::MissingRow(id));
        }
        Ok(())
    }
}

/// Process-local store for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    rows: Arc<DashMap<ProductId, ProductEntity>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> StoreResult<Vec<ProductEntity>> {
        metrics::record_store_operation("find_all");
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> StoreResult<Option<ProductEntity>> {
        metrics::record_store_operation("find_by_id");
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    async fn save(&self, mut record: ProductEntity) -> StoreResult<ProductEntity> {
        match record.id {
            None => {
                metrics::record_store_operation("insert");
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                record.id = Some(id);
                self.rows.insert(id, record.clone());
            }
            Some(id) => {
                metrics::record_store_operation("update");
                match self.rows.get_mut(&id) {
                    Some(mut row) => *row = record.clone(),
                    None => return Err(StoreError::MissingRow(id)),
                }
            }
        }
        Ok(record)
    }

    async fn delete(&self, record: &ProductEntity) -> StoreResult<()> {
        metrics::record_store_operation("delete");
        let id = record.id.ok_or(StoreError::MissingId)?;
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::MissingRow(id))
    }
}
