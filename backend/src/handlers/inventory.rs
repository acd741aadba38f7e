//! HTTP handlers for tenant inventory listings

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::ProductClassification;
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::{resolve_as_of, AsOfQuery};
use crate::services::inventory::{ClassifiedBatch, InventoryFilter, InventoryService};
use crate::AppState;

/// List a tenant's batches with derived status and trend
pub async fn list_inventory(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(filter): Query<InventoryFilter>,
) -> AppResult<Json<Vec<ClassifiedBatch>>> {
    let service = InventoryService::new(state.db, state.classifier);
    let rows = service.list_inventory(tenant_id, &filter).await?;
    Ok(Json(rows))
}

/// Roll up a tenant's batches per product
pub async fn list_product_stock(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<AsOfQuery>,
) -> AppResult<Json<Vec<ProductClassification>>> {
    let service = InventoryService::new(state.db, state.classifier);
    let products = service
        .product_summaries(tenant_id, resolve_as_of(query.as_of))
        .await?;
    Ok(Json(products))
}
