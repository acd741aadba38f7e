//! HTTP handlers for the Pharma Stock Management Platform

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

pub mod health;
pub mod inventory;
pub mod reporting;
pub mod stock;

pub use health::health_check;
pub use inventory::{list_inventory, list_product_stock};
pub use reporting::{get_reorder_candidates, get_stock_status_report};
pub use stock::{classify_batch, classify_product};

/// Optional evaluation date shared by the listing and report endpoints
#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<NaiveDate>,
}

/// Evaluation date, defaulting to today's UTC date
pub fn resolve_as_of(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}
