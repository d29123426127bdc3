use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storefront_support::app_state::AppState;
use storefront_support::config::AppConfig;
use storefront_support::routes;
use storefront_support::store::DataStore;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing storefront-support server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "chatbot_queries_total",
        "Total chatbot queries processed, labeled by classified intent"
    );
    metrics::describe_counter!("store_reads_total", "Total store file reads, labeled by file");
    metrics::describe_histogram!(
        "store_read_seconds",
        "Time to read and parse a store file"
    );

    // Initialize the file-backed data store
    tracing::info!(
        products = %config.products_path,
        orders = %config.orders_path,
        "Opening data store"
    );
    let store = DataStore::new(&config.products_path, &config.orders_path);

    // Create shared application state
    let state = AppState::new(store);

    // Build API routes
    let app = Router::new()
        .merge(routes::router(state))
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes));

    tracing::info!("Starting storefront-support on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
