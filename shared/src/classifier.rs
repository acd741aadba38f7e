//! Stock-status and trend classification for pharmaceutical batches
//!
//! Every inventory listing, report and purchase-order shortage view derives
//! its badges from these functions so the portals cannot drift apart.
//! Classification is pure: output depends only on the batch and `as_of`.

use chrono::NaiveDate;

use crate::error::ClassificationError;
use crate::models::{
    BatchClassification, ProductClassification, StockBatch, StockStatus, StockTrend,
};

/// Default near-expiry lookahead window in days
pub const DEFAULT_NEAR_EXPIRY_DAYS: u32 = 90;

/// Derives batch and product stock status against a near-expiry window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockClassifier {
    near_expiry_days: u32,
}

impl Default for StockClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_EXPIRY_DAYS)
    }
}

impl StockClassifier {
    pub fn new(near_expiry_days: u32) -> Self {
        Self { near_expiry_days }
    }

    pub fn near_expiry_days(&self) -> u32 {
        self.near_expiry_days
    }

    /// Classify one batch as of the given date.
    ///
    /// Status is decided in priority order: expired, near expiry, critical,
    /// low stock, in stock. Expiry always wins over quantity. The trend is
    /// independent of status and only looks at the quantity ratio.
    pub fn classify_batch(
        &self,
        batch: &StockBatch,
        as_of: NaiveDate,
    ) -> Result<BatchClassification, ClassificationError> {
        let expiry_date = check_batch(batch)?;
        let days_to_expiry = expiry_date.signed_duration_since(as_of).num_days();

        let status = if days_to_expiry < 0 {
            StockStatus::Expired
        } else if days_to_expiry <= i64::from(self.near_expiry_days) {
            StockStatus::NearExpiry
        } else {
            quantity_status(batch.current_stock, batch.minimum_stock)
        };

        Ok(BatchClassification {
            status,
            trend: stock_trend(batch.current_stock, batch.minimum_stock),
            days_to_expiry,
        })
    }

    /// Roll up every batch of one product.
    ///
    /// The overall status is the most severe per-batch status; on a severity
    /// tie the earliest batch wins. The overall trend is computed from the
    /// summed quantities, not from the per-batch trends.
    pub fn classify_product(
        &self,
        batches: &[StockBatch],
        as_of: NaiveDate,
    ) -> Result<ProductClassification, ClassificationError> {
        let first = batches.first().ok_or(ClassificationError::EmptyProduct)?;

        let mut total_current_stock: i64 = 0;
        let mut total_minimum_stock: i64 = 0;
        let mut overall_status = StockStatus::InStock;
        let mut earliest_expiry = NaiveDate::MAX;

        for batch in batches {
            let classification = self.classify_batch(batch, as_of)?;

            total_current_stock = total_current_stock.saturating_add(batch.current_stock);
            total_minimum_stock = total_minimum_stock.saturating_add(batch.minimum_stock);

            if classification.status.severity() > overall_status.severity() {
                overall_status = classification.status;
            }
            if let Some(expiry) = batch.expiry_date {
                earliest_expiry = earliest_expiry.min(expiry);
            }
        }

        Ok(ProductClassification {
            product_code: first.product_code.clone(),
            batch_count: batches.len(),
            total_current_stock,
            total_minimum_stock,
            overall_status,
            overall_trend: stock_trend(total_current_stock, total_minimum_stock),
            earliest_expiry,
        })
    }
}

/// Quantity-only status: critical at or below half the threshold, low at or below it
pub fn quantity_status(current_stock: i64, minimum_stock: i64) -> StockStatus {
    let current = i128::from(current_stock);
    let minimum = i128::from(minimum_stock);

    if current * 2 <= minimum {
        StockStatus::Critical
    } else if current <= minimum {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Bucket the stock percentage `current / minimum * 100`.
///
/// With no threshold configured any stock is `Good` and zero stock is
/// `Critical`. Comparisons are done in integers so boundaries are exact.
pub fn stock_trend(current_stock: i64, minimum_stock: i64) -> StockTrend {
    if minimum_stock <= 0 {
        return if current_stock > 0 {
            StockTrend::Good
        } else {
            StockTrend::Critical
        };
    }

    let current = i128::from(current_stock);
    let minimum = i128::from(minimum_stock);

    if current * 2 > minimum * 3 {
        StockTrend::Good
    } else if current > minimum {
        StockTrend::Normal
    } else if current * 2 > minimum {
        StockTrend::Low
    } else {
        StockTrend::Critical
    }
}

/// Stock as a percentage of the reorder threshold, `None` when no threshold is set
pub fn stock_percentage(current_stock: i64, minimum_stock: i64) -> Option<f64> {
    if minimum_stock <= 0 {
        return None;
    }
    Some(current_stock as f64 / minimum_stock as f64 * 100.0)
}

fn check_batch(batch: &StockBatch) -> Result<NaiveDate, ClassificationError> {
    if batch.current_stock < 0 {
        return Err(ClassificationError::invalid_batch(
            &batch.batch_number,
            "current stock cannot be negative",
        ));
    }
    if batch.minimum_stock < 0 {
        return Err(ClassificationError::invalid_batch(
            &batch.batch_number,
            "minimum stock cannot be negative",
        ));
    }
    batch.expiry_date.ok_or_else(|| {
        ClassificationError::invalid_batch(&batch.batch_number, "expiry date is missing")
    })
}
