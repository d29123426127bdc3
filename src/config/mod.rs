use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the product catalog JSON file.
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Path to the order book JSON file.
    #[serde(default = "default_orders_path")]
    pub orders_path: String,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_products_path() -> String {
    "data/products.json".to_string()
}

fn default_orders_path() -> String {
    "data/orders.json".to_string()
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
