//! Database models for the Pharma Stock Management Platform
//!
//! Re-exports models from the shared crate and adds backend-specific models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub use shared::models::*;

/// Row of the `stock_batches` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StockBatchRecord {
    pub id: Uuid,
    pub product_code: String,
    pub product_name: Option<String>,
    pub batch_number: String,
    pub manufacturing_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub mrp: Decimal,
    pub ptr: Decimal,
    pub pts: Decimal,
    pub tax_rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl StockBatchRecord {
    /// Split the row into its id, last update time and the shared batch model
    pub fn into_parts(self) -> (Uuid, DateTime<Utc>, StockBatch) {
        (
            self.id,
            self.updated_at,
            StockBatch {
                product_code: self.product_code,
                product_name: self.product_name,
                batch_number: self.batch_number,
                manufacturing_date: self.manufacturing_date,
                expiry_date: self.expiry_date,
                current_stock: self.current_stock,
                minimum_stock: self.minimum_stock,
                mrp: self.mrp,
                ptr: self.ptr,
                pts: self.pts,
                tax_rate: self.tax_rate,
            },
        )
    }
}
