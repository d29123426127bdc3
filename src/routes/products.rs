use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::product::Product;
use crate::routes::{not_found, AppError};

#[derive(Serialize)]
pub struct ProductList {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Product>,
}

#[derive(Serialize)]
pub struct ProductItem {
    pub success: bool,
    pub data: Product,
}

#[derive(Serialize)]
pub struct SearchResults {
    pub success: bool,
    pub count: usize,
    pub query: String,
    pub data: Vec<Product>,
}

#[derive(Serialize)]
pub struct CategoryResults {
    pub success: bool,
    pub count: usize,
    pub category: String,
    pub data: Vec<Product>,
}

#[derive(Serialize)]
pub struct StockInfo {
    pub success: bool,
    pub data: StockDetails,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetails {
    pub id: String,
    pub name: String,
    pub stock: u32,
    pub in_stock: bool,
    pub low_stock: bool,
    pub price: f64,
}

/// GET /products — full catalog.
pub async fn list(State(state): State<AppState>) -> Result<Json<ProductList>, AppError> {
    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error fetching products", e))?;

    Ok(Json(ProductList {
        success: true,
        count: products.len(),
        data: products,
    }))
}

/// GET /products/{id} — single product, 404 when unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error fetching product", e))?;

    match products.into_iter().find(|product| product.id == id) {
        Some(product) => Ok(Json(ProductItem {
            success: true,
            data: product,
        })
        .into_response()),
        None => Ok(not_found("Product not found".to_string())),
    }
}

/// GET /products/top/{limit} — best sellers, descending by units sold.
///
/// A limit that fails to parse (or parses to zero) falls back to 5,
/// mirroring the storefront UI's behavior.
pub async fn top(
    State(state): State<AppState>,
    Path(limit): Path<String>,
) -> Result<Json<ProductList>, AppError> {
    let limit = limit
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(5);

    let mut products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error fetching top products", e))?;

    products.sort_by(|a, b| b.sold.cmp(&a.sold));
    products.truncate(limit);

    Ok(Json(ProductList {
        success: true,
        count: products.len(),
        data: products,
    }))
}

/// GET /products/search/{query} — substring match over name, category,
/// description, and colors.
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<SearchResults>, AppError> {
    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error searching products", e))?;

    let term = query.to_lowercase();
    let matches: Vec<Product> = products
        .into_iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&term)
                || product.category.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
                || product
                    .colors
                    .iter()
                    .any(|color| color.to_lowercase().contains(&term))
        })
        .collect();

    Ok(Json(SearchResults {
        success: true,
        count: matches.len(),
        query,
        data: matches,
    }))
}

/// GET /products/category/{category} — exact (case-insensitive) category match.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResults>, AppError> {
    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error fetching products by category", e))?;

    let wanted = category.to_lowercase();
    let matches: Vec<Product> = products
        .into_iter()
        .filter(|product| product.category.to_lowercase() == wanted)
        .collect();

    Ok(Json(CategoryResults {
        success: true,
        count: matches.len(),
        category,
        data: matches,
    }))
}

/// GET /products/stock/{product_name} — first product whose name contains
/// the given fragment, 404 when none does.
pub async fn stock(
    State(state): State<AppState>,
    Path(product_name): Path<String>,
) -> Result<Response, AppError> {
    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal("Error checking stock", e))?;

    let fragment = product_name.to_lowercase();
    match products
        .into_iter()
        .find(|product| product.name.to_lowercase().contains(&fragment))
    {
        Some(product) => Ok(Json(StockInfo {
            success: true,
            data: StockDetails {
                id: product.id.clone(),
                name: product.name.clone(),
                stock: product.stock,
                in_stock: product.in_stock(),
                low_stock: product.low_stock(),
                price: product.price,
            },
        })
        .into_response()),
        None => Ok(not_found(format!("Product \"{product_name}\" not found"))),
    }
}
