//! Reporting service for dashboard stock buckets and reorder shortages

use chrono::NaiveDate;
use serde::Serialize;
use shared::{StockClassifier, StockStatusSummary};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::inventory::{classify_records, ClassifiedBatch, InventoryService};

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    inventory: InventoryService,
}

/// Dashboard stock-status report
#[derive(Debug, Serialize)]
pub struct StockStatusReport {
    pub as_of: NaiveDate,
    pub near_expiry_days: u32,
    #[serde(flatten)]
    pub summary: StockStatusSummary,
}

impl ReportingService {
    pub fn new(inventory: InventoryService) -> Self {
        Self { inventory }
    }

    /// Count a tenant's batches per stock status
    pub async fn get_stock_status_report(
        &self,
        tenant_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<StockStatusReport> {
        let records = self.inventory.fetch_batches(tenant_id, None).await?;
        let classifier = self.inventory.classifier();
        let rows = classify_records(&classifier, records, as_of)?;

        Ok(build_status_report(&classifier, &rows, as_of))
    }

    /// Batches that are critical or low on stock, most urgent first
    pub async fn get_reorder_candidates(
        &self,
        tenant_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Vec<ClassifiedBatch>> {
        let records = self.inventory.fetch_batches(tenant_id, None).await?;
        let rows = classify_records(&self.inventory.classifier(), records, as_of)?;

        let candidates = reorder_candidates(rows);
        tracing::debug!(%tenant_id, %as_of, count = candidates.len(), "Reorder candidates");
        Ok(candidates)
    }
}

pub fn build_status_report(
    classifier: &StockClassifier,
    rows: &[ClassifiedBatch],
    as_of: NaiveDate,
) -> StockStatusReport {
    StockStatusReport {
        as_of,
        near_expiry_days: classifier.near_expiry_days(),
        summary: rows.iter().map(|row| row.status).collect(),
    }
}

/// Keep reorder candidates, critical before low stock, stable otherwise
pub fn reorder_candidates(rows: Vec<ClassifiedBatch>) -> Vec<ClassifiedBatch> {
    let mut candidates: Vec<ClassifiedBatch> = rows
        .into_iter()
        .filter(|row| row.status.is_reorder_candidate())
        .collect();
    candidates.sort_by_key(|row| std::cmp::Reverse(row.status.severity()));
    candidates
}
