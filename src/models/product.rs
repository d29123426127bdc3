use serde::{Deserialize, Serialize};

/// A catalog product as stored in `products.json`.
///
/// Records are read-only from the API's perspective; the JSON file is the
/// system of record and is never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    /// Cumulative units sold, used for best-seller ranking.
    pub sold: u32,
    pub rating: f64,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

/// Stock level below which a product is flagged as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}
