//! Route definitions for the Pharma Stock Management Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Stateless classification shared by the distributor and retailer portals
        .nest("/stock", stock_routes())
        // Tenant-scoped inventory and reporting
        .nest("/tenants/:tenant_id", tenant_routes())
}

/// Classification routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(handlers::classify_batch))
        .route("/classify-product", post(handlers::classify_product))
}

/// Tenant inventory and report routes
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(handlers::list_inventory))
        .route("/inventory/products", get(handlers::list_product_stock))
        .route("/reports/stock-status", get(handlers::get_stock_status_report))
        .route("/reorder-candidates", get(handlers::get_reorder_candidates))
}
