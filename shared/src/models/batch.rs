//! Stock batch models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One received lot of one product at one location
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct StockBatch {
    /// Stable product identifier, shared by every batch of the product
    #[validate(length(min = 1, max = 64))]
    pub product_code: String,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Unique within the product
    #[validate(length(min = 1, max = 64))]
    pub batch_number: String,
    #[serde(default)]
    pub manufacturing_date: Option<NaiveDate>,
    /// Required for classification; kept optional so legacy rows can be rejected explicitly
    #[validate(required)]
    pub expiry_date: Option<NaiveDate>,
    /// Quantity presently on hand
    #[validate(range(min = 0))]
    pub current_stock: i64,
    /// Reorder threshold, 0 means no floor configured
    #[validate(range(min = 0))]
    pub minimum_stock: i64,
    /// Maximum retail price
    #[serde(default)]
    pub mrp: Decimal,
    /// Price to retailer
    #[serde(default)]
    pub ptr: Decimal,
    /// Price to stockist
    #[serde(default)]
    pub pts: Decimal,
    /// GST percentage
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl StockBatch {
    /// Create a batch with only the fields classification looks at; prices default to zero
    pub fn new(
        product_code: impl Into<String>,
        batch_number: impl Into<String>,
        expiry_date: NaiveDate,
        current_stock: i64,
        minimum_stock: i64,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            product_name: None,
            batch_number: batch_number.into(),
            manufacturing_date: None,
            expiry_date: Some(expiry_date),
            current_stock,
            minimum_stock,
            mrp: Decimal::ZERO,
            ptr: Decimal::ZERO,
            pts: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
        }
    }

    /// Tax-inclusive value of the stock on hand at the retailer price
    pub fn stock_value(&self) -> Decimal {
        net_value(self.current_stock, self.ptr, self.tax_rate)
    }
}

/// Line value including tax: `quantity * rate * (1 + tax_rate / 100)`
pub fn net_value(quantity: i64, rate: Decimal, tax_rate: Decimal) -> Decimal {
    Decimal::from(quantity) * rate * (Decimal::ONE + tax_rate / Decimal::ONE_HUNDRED)
}

/// All batches of one product, in the order they were supplied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductBatches {
    pub product_code: String,
    pub batches: Vec<StockBatch>,
}

/// Partition a flat batch list by product code.
///
/// Products appear in first-seen order and each keeps its batches in input
/// order, so every returned group holds at least one batch.
pub fn group_by_product(batches: Vec<StockBatch>) -> Vec<ProductBatches> {
    let mut groups: Vec<ProductBatches> = Vec::new();

    for batch in batches {
        match groups
            .iter_mut()
            .find(|g| g.product_code == batch.product_code)
        {
            Some(group) => group.batches.push(batch),
            None => groups.push(ProductBatches {
                product_code: batch.product_code.clone(),
                batches: vec![batch],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[test]
    fn test_net_value_includes_tax() {
        // 10 strips at 25.50 with 12% GST
        let value = net_value(10, Decimal::from_str("25.50").unwrap(), Decimal::from(12));
        assert_eq!(value, Decimal::from_str("285.60").unwrap());
    }

    #[test]
    fn test_net_value_zero_tax() {
        assert_eq!(net_value(4, Decimal::from(5), Decimal::ZERO), Decimal::from(20));
    }

    #[test]
    fn test_stock_value_uses_ptr() {
        let mut batch = StockBatch::new("PCM500", "B001", date("2025-06-10"), 100, 50);
        batch.ptr = Decimal::from(2);
        batch.mrp = Decimal::from(3);
        batch.tax_rate = Decimal::from(5);
        assert_eq!(batch.stock_value(), Decimal::from(210));
    }

    #[test]
    fn test_group_by_product_preserves_order() {
        let exp = date("2025-01-01");
        let batches = vec![
            StockBatch::new("AMX", "A1", exp, 1, 1),
            StockBatch::new("PCM", "P1", exp, 2, 2),
            StockBatch::new("AMX", "A2", exp, 3, 3),
        ];

        let groups = group_by_product(batches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product_code, "AMX");
        assert_eq!(groups[0].batches[0].batch_number, "A1");
        assert_eq!(groups[0].batches[1].batch_number, "A2");
        assert_eq!(groups[1].product_code, "PCM");
        assert_eq!(groups[1].batches.len(), 1);
    }

    #[test]
    fn test_group_by_product_empty() {
        assert!(group_by_product(Vec::new()).is_empty());
    }

    #[test]
    fn test_batch_validation() {
        let batch = StockBatch::new("PCM", "B1", date("2025-01-01"), 10, 5);
        assert!(batch.validate().is_ok());

        let mut negative = batch.clone();
        negative.current_stock = -1;
        assert!(negative.validate().is_err());

        let mut no_expiry = batch.clone();
        no_expiry.expiry_date = None;
        assert!(no_expiry.validate().is_err());

        let mut blank_code = batch;
        blank_code.product_code = String::new();
        assert!(blank_code.validate().is_err());
    }
}
