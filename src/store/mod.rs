//! File-backed data store for products and orders.
//!
//! The JSON files are the system of record. Every call re-reads the file so
//! responses always reflect the latest contents on disk; there is no cache
//! and nothing to invalidate. Reads are small and local, so the cost is
//! negligible at this system's scale.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::order::Order;
use crate::models::product::Product;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle on the backing JSON files. Cheap to clone via `Arc` in app state.
pub struct DataStore {
    products_path: PathBuf,
    orders_path: PathBuf,
}

impl DataStore {
    pub fn new(products_path: impl Into<PathBuf>, orders_path: impl Into<PathBuf>) -> Self {
        Self {
            products_path: products_path.into(),
            orders_path: orders_path.into(),
        }
    }

    /// Read and parse the product catalog from disk.
    pub async fn load_products(&self) -> Result<Vec<Product>, StoreError> {
        load_file(&self.products_path, "products").await
    }

    /// Read and parse the order book from disk.
    pub async fn load_orders(&self) -> Result<Vec<Order>, StoreError> {
        load_file(&self.orders_path, "orders").await
    }
}

async fn load_file<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<Vec<T>, StoreError> {
    let start = std::time::Instant::now();

    let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    metrics::counter!("store_reads_total", "file" => kind).increment(1);
    metrics::histogram!("store_read_seconds", "file" => kind).record(start.elapsed().as_secs_f64());
    tracing::debug!(kind, count = records.len(), "loaded store file");

    Ok(records)
}
