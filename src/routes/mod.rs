use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::app_state::AppState;
use crate::store::StoreError;

pub mod chatbot;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;

/// Request failure surfaced to the client.
///
/// Expected misses (unknown order id, empty search) are NOT errors; handlers
/// model those as ordinary responses with `success: false`. This type covers
/// the two remaining cases: bad client input and store failures.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    Internal {
        message: &'static str,
        source: StoreError,
    },
}

impl AppError {
    pub fn internal(message: &'static str, source: StoreError) -> Self {
        Self::Internal { message, source }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    success: false,
                    message: message.to_string(),
                    error: None,
                }),
            )
                .into_response(),
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        success: false,
                        message: message.to_string(),
                        error: Some(source.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// 404 with the storefront's `{success: false, message}` body shape.
pub(crate) fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            success: false,
            message,
            error: None,
        }),
    )
        .into_response()
}

#[derive(Serialize)]
struct ApiIndex {
    message: &'static str,
    version: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    products: &'static str,
    orders: &'static str,
    chatbot: &'static str,
    health: &'static str,
}

async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "E-commerce Customer Support Chatbot API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            products: "/products",
            orders: "/orders",
            chatbot: "/chatbot",
            health: "/health",
        },
    })
}

/// All application routes (metrics excluded; it carries its own state).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_check))
        .route("/chatbot/query", post(chatbot::query))
        .route("/chatbot/help", get(chatbot::help))
        .route("/chatbot/suggestions", get(chatbot::suggestions))
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::get_by_id))
        .route("/products/top/{limit}", get(products::top))
        .route("/products/search/{query}", get(products::search))
        .route("/products/category/{category}", get(products::by_category))
        .route("/products/stock/{product_name}", get(products::stock))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::get_by_id))
        .route("/orders/{id}/track", get(orders::track))
        .route("/orders/customer/{customer_id}", get(orders::by_customer))
        .route("/orders/status/{status}", get(orders::by_status))
        .with_state(state)
}
