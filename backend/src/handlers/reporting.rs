//! Reporting handlers for stock dashboards and reorder shortages

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::{resolve_as_of, AsOfQuery};
use crate::services::inventory::{ClassifiedBatch, InventoryService};
use crate::services::reporting::{ReportingService, StockStatusReport};
use crate::AppState;

/// Get stock-status bucket counts
pub async fn get_stock_status_report(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> AppResult<Json<StockStatusReport>> {
    let service = ReportingService::new(InventoryService::new(state.db, state.classifier));
    let report = service
        .get_stock_status_report(tenant_id, resolve_as_of(query.as_of))
        .await?;
    Ok(Json(report))
}

/// Get batches to consider for purchase-order shortage suggestions
pub async fn get_reorder_candidates(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> AppResult<Json<Vec<ClassifiedBatch>>> {
    let service = ReportingService::new(InventoryService::new(state.db, state.classifier));
    let candidates = service
        .get_reorder_candidates(tenant_id, resolve_as_of(query.as_of))
        .await?;
    Ok(Json(candidates))
}
