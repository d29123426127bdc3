use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub products: ComponentHealth,
    pub orders: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
    pub count: Option<usize>,
}

/// GET /health — liveness check with per-store-file status.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let start = std::time::Instant::now();
    let products_check = match state.store.load_products().await {
        Ok(products) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(start.elapsed().as_millis() as u64),
            count: Some(products.len()),
        },
        Err(_) => ComponentHealth {
            status: "error".to_string(),
            latency_ms: None,
            count: None,
        },
    };

    let orders_start = std::time::Instant::now();
    let orders_check = match state.store.load_orders().await {
        Ok(orders) => ComponentHealth {
            status: "ok".to_string(),
            latency_ms: Some(orders_start.elapsed().as_millis() as u64),
            count: Some(orders.len()),
        },
        Err(_) => ComponentHealth {
            status: "error".to_string(),
            latency_ms: None,
            count: None,
        },
    };

    let all_healthy = products_check.status == "ok" && orders_check.status == "ok";
    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if all_healthy {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        checks: HealthChecks {
            products: products_check,
            orders: orders_check,
        },
    };

    (status_code, Json(response))
}
