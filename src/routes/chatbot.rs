use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use garde::Validate;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::chat::{ChatQueryRequest, ChatQueryResponse};
use crate::routes::AppError;
use crate::services;

const QUERY_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// POST /chatbot/query — classify a customer message and answer it.
///
/// A missing, non-string, or blank `message` is a 400; store failures are
/// a 500. Everything else, including "no such order" and "no results", is a
/// 200 whose `success` flag comes from the handler.
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<ChatQueryRequest>, JsonRejection>,
) -> Result<Json<ChatQueryResponse>, AppError> {
    let Json(request) =
        payload.map_err(|_| AppError::BadRequest("Please provide a valid message"))?;

    if request.validate().is_err() || request.message.trim().is_empty() {
        return Err(AppError::BadRequest("Please provide a valid message"));
    }
    let message = request.message.trim().to_string();

    let products = state
        .store
        .load_products()
        .await
        .map_err(|e| AppError::internal(QUERY_ERROR_MESSAGE, e))?;
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal(QUERY_ERROR_MESSAGE, e))?;

    let reply = services::chatbot::process_query(&message, &products, &orders);

    metrics::counter!("chatbot_queries_total", "intent" => reply.response_type.to_string())
        .increment(1);
    tracing::info!(
        intent = %reply.response_type,
        success = reply.success,
        "chatbot query classified"
    );

    Ok(Json(ChatQueryResponse {
        query: message,
        timestamp: Utc::now(),
        reply,
    }))
}

#[derive(Serialize)]
pub struct HelpResponse {
    pub success: bool,
    pub data: HelpData,
}

#[derive(Serialize)]
pub struct HelpData {
    pub capabilities: Vec<Capability>,
    pub tips: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct Capability {
    pub feature: &'static str,
    pub description: &'static str,
    pub examples: Vec<&'static str>,
}

/// GET /chatbot/help — what the assistant can do, with example phrasings.
pub async fn help() -> Json<HelpResponse> {
    Json(HelpResponse {
        success: true,
        data: HelpData {
            capabilities: vec![
                Capability {
                    feature: "Order Status",
                    description: "Check the status of your orders",
                    examples: vec![
                        "What's the status of order 12345?",
                        "Track order 12346",
                        "Where is my order 12347?",
                    ],
                },
                Capability {
                    feature: "Product Stock",
                    description: "Check inventory levels for products",
                    examples: vec![
                        "How many Classic T-Shirts are left in stock?",
                        "Is the Denim Jeans available?",
                        "Check stock for Running Shoes",
                    ],
                },
                Capability {
                    feature: "Top Products",
                    description: "Get the best selling products",
                    examples: vec![
                        "Show me the top 5 products",
                        "What are the most popular items?",
                        "Top 3 bestsellers",
                    ],
                },
                Capability {
                    feature: "Product Search",
                    description: "Find products by name, category, or description",
                    examples: vec![
                        "Show me summer dresses",
                        "Find running shoes",
                        "Search for jackets",
                    ],
                },
            ],
            tips: vec![
                "Use specific order IDs (5 digits) for order status",
                "Include product names for stock checks",
                "Try different search terms if you don't find what you're looking for",
                "Ask for help anytime by saying \"help\" or \"assist\"",
            ],
        },
    })
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub data: Vec<String>,
}

/// GET /chatbot/suggestions — 5 example queries, sampled uniformly.
pub async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        success: true,
        data: services::suggestions::sample(5),
    })
}
