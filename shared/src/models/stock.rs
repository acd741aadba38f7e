//! Stock status and trend models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discrete stock status of a batch or product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    /// At or below half the reorder threshold
    Critical,
    /// Expiry falls inside the lookahead window
    NearExpiry,
    Expired,
}

impl StockStatus {
    /// Rank used for product roll-ups, higher is more severe.
    /// Near expiry shares the critical rank.
    pub fn severity(&self) -> u8 {
        match self {
            StockStatus::InStock => 1,
            StockStatus::LowStock => 2,
            StockStatus::Critical | StockStatus::NearExpiry => 3,
            StockStatus::Expired => 4,
        }
    }

    /// Whether purchase-order shortage suggestions should include this batch
    pub fn is_reorder_candidate(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::LowStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "In Stock"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::Critical => write!(f, "Critical"),
            StockStatus::NearExpiry => write!(f, "Near Expiry"),
            StockStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Quantity-ratio descriptor used by dashboards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockTrend {
    /// Above 150% of the reorder threshold
    Good,
    /// Above 100%, up to 150%
    Normal,
    /// Above 50%, up to 100%
    Low,
    /// 50% or less
    Critical,
}

impl std::fmt::Display for StockTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockTrend::Good => write!(f, "Good"),
            StockTrend::Normal => write!(f, "Normal"),
            StockTrend::Low => write!(f, "Low"),
            StockTrend::Critical => write!(f, "Critical"),
        }
    }
}

/// Result of classifying a single batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchClassification {
    pub status: StockStatus,
    pub trend: StockTrend,
    /// Whole days from the evaluation date to expiry, negative once expired
    pub days_to_expiry: i64,
}

/// Roll-up of every batch of one product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductClassification {
    pub product_code: String,
    pub batch_count: usize,
    pub total_current_stock: i64,
    pub total_minimum_stock: i64,
    pub overall_status: StockStatus,
    pub overall_trend: StockTrend,
    /// Earliest expiry across the product's batches
    pub earliest_expiry: NaiveDate,
}

/// Batch counts per status for dashboard tiles
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockStatusSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub critical: usize,
    pub near_expiry: usize,
    pub expired: usize,
    /// Batches that are critical or low on stock
    pub needs_reorder: usize,
}

impl StockStatusSummary {
    /// Count one classified batch
    pub fn record(&mut self, status: StockStatus) {
        self.total += 1;
        match status {
            StockStatus::InStock => self.in_stock += 1,
            StockStatus::LowStock => self.low_stock += 1,
            StockStatus::Critical => self.critical += 1,
            StockStatus::NearExpiry => self.near_expiry += 1,
            StockStatus::Expired => self.expired += 1,
        }
        if status.is_reorder_candidate() {
            self.needs_reorder += 1;
        }
    }
}

impl FromIterator<StockStatus> for StockStatusSummary {
    fn from_iter<I: IntoIterator<Item = StockStatus>>(iter: I) -> Self {
        let mut summary = Self::default();
        for status in iter {
            summary.record(status);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(StockStatus::InStock.to_string(), "In Stock");
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
        assert_eq!(StockStatus::NearExpiry.to_string(), "Near Expiry");
        assert_eq!(StockTrend::Normal.to_string(), "Normal");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&StockStatus::NearExpiry).unwrap();
        assert_eq!(json, "\"near_expiry\"");
        let parsed: StockStatus = serde_json::from_str("\"low_stock\"").unwrap();
        assert_eq!(parsed, StockStatus::LowStock);
    }

    #[test]
    fn test_severity_ranking() {
        assert!(StockStatus::Expired.severity() > StockStatus::Critical.severity());
        assert_eq!(
            StockStatus::Critical.severity(),
            StockStatus::NearExpiry.severity()
        );
        assert!(StockStatus::NearExpiry.severity() > StockStatus::LowStock.severity());
        assert!(StockStatus::LowStock.severity() > StockStatus::InStock.severity());
    }

    #[test]
    fn test_reorder_candidates() {
        assert!(StockStatus::Critical.is_reorder_candidate());
        assert!(StockStatus::LowStock.is_reorder_candidate());
        assert!(!StockStatus::InStock.is_reorder_candidate());
        assert!(!StockStatus::NearExpiry.is_reorder_candidate());
        assert!(!StockStatus::Expired.is_reorder_candidate());
    }

    #[test]
    fn test_summary_counts() {
        let summary: StockStatusSummary = [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::Critical,
            StockStatus::Critical,
            StockStatus::Expired,
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.total, 5);
        assert_eq!(summary.in_stock, 1);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.near_expiry, 0);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.needs_reorder, 3);
    }
}
