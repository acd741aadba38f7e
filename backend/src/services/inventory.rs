//! Inventory service for listing stored batches with their derived stock status

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    group_by_product, ProductClassification, StockBatch, StockClassifier, StockStatus,
    StockTrend,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::StockBatchRecord;

/// Inventory service reading tenant batches and classifying them per request
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
    classifier: StockClassifier,
}

/// A stored batch together with its derived status
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedBatch {
    pub id: Uuid,
    #[serde(flatten)]
    pub batch: StockBatch,
    pub status: StockStatus,
    pub trend: StockTrend,
    pub days_to_expiry: i64,
    /// Tax-inclusive value of the stock on hand at PTR
    pub stock_value: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for the inventory listing
#[derive(Debug, Default, Deserialize)]
pub struct InventoryFilter {
    pub as_of: Option<NaiveDate>,
    pub status: Option<StockStatus>,
    pub product_code: Option<String>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool, classifier: StockClassifier) -> Self {
        Self { db, classifier }
    }

    pub fn classifier(&self) -> StockClassifier {
        self.classifier
    }

    /// Fetch raw batch rows for a tenant, optionally for one product
    pub async fn fetch_batches(
        &self,
        tenant_id: Uuid,
        product_code: Option<&str>,
    ) -> AppResult<Vec<StockBatchRecord>> {
        let records = sqlx::query_as::<_, StockBatchRecord>(
            r#"
            SELECT id, product_code, product_name, batch_number, manufacturing_date, expiry_date,
                   current_stock, minimum_stock, mrp, ptr, pts, tax_rate, updated_at
            FROM stock_batches
            WHERE tenant_id = $1 AND ($2::TEXT IS NULL OR product_code = $2)
            ORDER BY product_code, expiry_date NULLS FIRST, batch_number
            "#,
        )
        .bind(tenant_id)
        .bind(product_code)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// List a tenant's batches with status, trend and stock value
    pub async fn list_inventory(
        &self,
        tenant_id: Uuid,
        filter: &InventoryFilter,
    ) -> AppResult<Vec<ClassifiedBatch>> {
        let as_of = filter.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let records = self
            .fetch_batches(tenant_id, filter.product_code.as_deref())
            .await?;

        tracing::debug!(%tenant_id, %as_of, rows = records.len(), "Classifying inventory");

        let mut rows = classify_records(&self.classifier, records, as_of)?;
        if let Some(status) = filter.status {
            rows.retain(|row| row.status == status);
        }
        Ok(rows)
    }

    /// One roll-up per product held by the tenant
    pub async fn product_summaries(
        &self,
        tenant_id: Uuid,
        as_of: NaiveDate,
    ) -> AppResult<Vec<ProductClassification>> {
        let records = self.fetch_batches(tenant_id, None).await?;

        tracing::debug!(%tenant_id, %as_of, rows = records.len(), "Rolling up products");

        summarize_products(&self.classifier, records, as_of)
    }
}

/// Classify every row, failing the whole set on the first invalid batch
pub fn classify_records(
    classifier: &StockClassifier,
    records: Vec<StockBatchRecord>,
    as_of: NaiveDate,
) -> AppResult<Vec<ClassifiedBatch>> {
    records
        .into_iter()
        .map(|record| -> AppResult<ClassifiedBatch> {
            let (id, updated_at, batch) = record.into_parts();
            let classification = classifier.classify_batch(&batch, as_of).map_err(|e| {
                tracing::error!(batch_id = %id, "Stored batch failed classification: {}", e);
                e
            })?;

            Ok(ClassifiedBatch {
                id,
                stock_value: batch.stock_value(),
                batch,
                status: classification.status,
                trend: classification.trend,
                days_to_expiry: classification.days_to_expiry,
                updated_at,
            })
        })
        .collect()
}

/// Group rows by product and roll each group up
pub fn summarize_products(
    classifier: &StockClassifier,
    records: Vec<StockBatchRecord>,
    as_of: NaiveDate,
) -> AppResult<Vec<ProductClassification>> {
    let batches = records
        .into_iter()
        .map(|record| record.into_parts().2)
        .collect();

    group_by_product(batches)
        .iter()
        .map(|group| {
            classifier
                .classify_product(&group.batches, as_of)
                .map_err(Into::into)
        })
        .collect()
}
