use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::models::order::{Order, OrderItem, OrderStatus};
use crate::models::product::Product;

/// Discriminant the UI switches on to pick a rendering template.
#[derive(Debug, Clone, Copy, Serialize, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseType {
    OrderStatus,
    OrderNotFound,
    OrderHelp,
    StockCheck,
    StockHelp,
    TopProducts,
    ProductSearch,
    SearchHelp,
    NoResults,
    Greeting,
    Unknown,
}

/// Structured payload attached to a chatbot reply, varying by response type.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ChatData {
    Order(OrderStatusData),
    Stock(StockCheckData),
    Products(Vec<Product>),
}

/// Order summary returned for `order_status` replies.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusData {
    pub order_id: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<chrono::NaiveDate>,
    pub status_message: String,
}

impl OrderStatusData {
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            status: order.status,
            customer_name: order.customer_name.clone(),
            items: order.items.clone(),
            total: order.total,
            tracking_number: order.tracking_number.clone(),
            estimated_delivery: order.estimated_delivery,
            delivered_date: order.delivered_date,
            status_message: order.status_message(),
        }
    }
}

/// Inventory snapshot returned for `stock_check` replies.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockCheckData {
    pub product: Product,
    pub stock: u32,
    pub in_stock: bool,
    pub low_stock: bool,
}

/// A classified chatbot reply: type tag, outcome flag, optional payload,
/// and a human-readable message.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChatReply {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ChatData>,
    #[serde(rename = "searchTerm", skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    pub message: String,
}

impl ChatReply {
    /// Reply carrying only a message, no payload.
    pub fn plain(response_type: ResponseType, success: bool, message: impl Into<String>) -> Self {
        Self {
            response_type,
            success,
            data: None,
            search_term: None,
            message: message.into(),
        }
    }
}

/// Body of `POST /chatbot/query`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatQueryRequest {
    #[garde(length(min = 1))]
    pub message: String,
}

/// Envelope for `POST /chatbot/query` responses. The reply is flattened so
/// its `success`, `type`, and `message` sit at the top level next to the
/// echoed query and timestamp.
#[derive(Debug, Serialize)]
pub struct ChatQueryResponse {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub reply: ChatReply,
}
