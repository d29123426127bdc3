use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle states an order moves through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// Catch-all for status strings in the store that we don't recognize.
    Unknown,
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(OrderStatus::Unknown)
    }
}

/// A single line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A customer order as stored in `orders.json`.
///
/// Order ids are 5-digit numeric strings and unique within the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

impl Order {
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Customer-facing sentence describing where the order stands.
    ///
    /// Shared by the chatbot order handler and the order routes so both
    /// surfaces phrase status identically.
    pub fn status_message(&self) -> String {
        match self.status {
            OrderStatus::Pending => {
                "Your order is being processed and will be shipped soon.".to_string()
            }
            OrderStatus::Processing => "Your order is being prepared for shipment.".to_string(),
            OrderStatus::Shipped => {
                let tracking = match &self.tracking_number {
                    Some(number) => format!(" with tracking number {number}"),
                    None => String::new(),
                };
                format!(
                    "Your order has been shipped{tracking}. Expected delivery: {}.",
                    format_date(self.estimated_delivery)
                )
            }
            OrderStatus::Delivered => format!(
                "Your order was delivered on {}.",
                format_date(self.delivered_date)
            ),
            OrderStatus::Cancelled => match &self.cancel_reason {
                Some(reason) => format!("Your order was cancelled: {reason}"),
                None => "Your order was cancelled.".to_string(),
            },
            OrderStatus::Unknown => "Order status unknown.".to_string(),
        }
    }
}

/// en-US short date (no zero padding), matching the upstream storefront UI.
fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "unknown".to_string(),
    }
}
