use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::order::{Order, OrderStatus};
use crate::routes::{not_found, AppError};

#[derive(Serialize)]
pub struct OrderList {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Order>,
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub success: bool,
    pub data: OrderSummary,
}

/// Order enriched with derived counts and the status sentence.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: Order,
    pub item_count: usize,
    pub total_items: u32,
    pub status_message: String,
}

#[derive(Serialize)]
pub struct CustomerOrders {
    pub success: bool,
    pub count: usize,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub data: Vec<Order>,
}

#[derive(Serialize)]
pub struct StatusOrders {
    pub success: bool,
    pub count: usize,
    pub status: String,
    pub data: Vec<Order>,
}

#[derive(Serialize)]
pub struct TrackingResponse {
    pub success: bool,
    pub data: TrackingInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<NaiveDate>,
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

/// GET /orders — full order book.
pub async fn list(State(state): State<AppState>) -> Result<Json<OrderList>, AppError> {
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal("Error fetching orders", e))?;

    Ok(Json(OrderList {
        success: true,
        count: orders.len(),
        data: orders,
    }))
}

/// GET /orders/{id} — single order with derived summary, 404 when unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal("Error fetching order", e))?;

    match orders.into_iter().find(|order| order.id == id) {
        Some(order) => {
            let summary = OrderSummary {
                item_count: order.items.len(),
                total_items: order.total_items(),
                status_message: order.status_message(),
                order,
            };
            Ok(Json(OrderItemResponse {
                success: true,
                data: summary,
            })
            .into_response())
        }
        None => Ok(not_found(format!("Order with ID {id} not found"))),
    }
}

/// GET /orders/customer/{customer_id} — all orders for one customer.
pub async fn by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerOrders>, AppError> {
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal("Error fetching customer orders", e))?;

    let matches: Vec<Order> = orders
        .into_iter()
        .filter(|order| order.customer_id == customer_id)
        .collect();

    Ok(Json(CustomerOrders {
        success: true,
        count: matches.len(),
        customer_id,
        data: matches,
    }))
}

/// GET /orders/status/{status} — all orders in a given state.
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<StatusOrders>, AppError> {
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal("Error fetching orders by status", e))?;

    let wanted = status.to_lowercase();
    let matches: Vec<Order> = orders
        .into_iter()
        .filter(|order| order.status.to_string() == wanted)
        .collect();

    Ok(Json(StatusOrders {
        success: true,
        count: matches.len(),
        status,
        data: matches,
    }))
}

/// GET /orders/{id}/track — shipment tracking details, 404 when unknown.
pub async fn track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let orders = state
        .store
        .load_orders()
        .await
        .map_err(|e| AppError::internal("Error fetching tracking information", e))?;

    match orders.into_iter().find(|order| order.id == id) {
        Some(order) => Ok(Json(TrackingResponse {
            success: true,
            data: TrackingInfo {
                order_id: order.id.clone(),
                status: order.status,
                tracking_number: order.tracking_number.clone(),
                estimated_delivery: order.estimated_delivery,
                delivered_date: order.delivered_date,
                status_message: order.status_message(),
                shipping_address: order.shipping_address.clone(),
            },
        })
        .into_response()),
        None => Ok(not_found(format!("Order with ID {id} not found"))),
    }
}
