//! WebAssembly module for Pharma Stock Management Platform
//!
//! Lets the distributor and retailer portals run the same stock rules as the
//! backend:
//! - Batch status and trend classification
//! - Product roll-ups over multiple batches
//! - Stock percentage against the reorder threshold
//! - Tax-inclusive net value

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::classifier::*;
pub use shared::models::*;
pub use shared::validation::*;

/// Classify one batch given as JSON; returns the classification as JSON
#[wasm_bindgen]
pub fn classify_stock_batch(
    batch_json: &str,
    as_of: Option<String>,
    near_expiry_days: Option<u32>,
) -> Result<String, JsValue> {
    classify_batch_json(batch_json, as_of.as_deref(), near_expiry_days)
        .map_err(|e| JsValue::from_str(&e))
}

/// Roll up a JSON array of one product's batches; returns the roll-up as JSON
#[wasm_bindgen]
pub fn classify_stock_product(
    batches_json: &str,
    as_of: Option<String>,
    near_expiry_days: Option<u32>,
) -> Result<String, JsValue> {
    classify_product_json(batches_json, as_of.as_deref(), near_expiry_days)
        .map_err(|e| JsValue::from_str(&e))
}

/// Trend label for a quantity against its reorder threshold
#[wasm_bindgen]
pub fn classify_stock_trend(current_stock: u32, minimum_stock: u32) -> String {
    stock_trend(i64::from(current_stock), i64::from(minimum_stock)).to_string()
}

/// Quantity-only status label, ignoring expiry
#[wasm_bindgen]
pub fn classify_quantity_status(current_stock: u32, minimum_stock: u32) -> String {
    quantity_status(i64::from(current_stock), i64::from(minimum_stock)).to_string()
}

/// Stock as a percentage of its reorder threshold; undefined when no threshold is set
#[wasm_bindgen]
pub fn calculate_stock_percentage(current_stock: u32, minimum_stock: u32) -> Option<f64> {
    stock_percentage(i64::from(current_stock), i64::from(minimum_stock))
}

/// Calculate tax-inclusive line value
#[wasm_bindgen]
pub fn calculate_net_value(quantity: u32, rate: f64, tax_rate: f64) -> f64 {
    let rate = Decimal::try_from(rate).unwrap_or(Decimal::ZERO);
    let tax_rate = Decimal::try_from(tax_rate).unwrap_or(Decimal::ZERO);
    let value = net_value(i64::from(quantity), rate, tax_rate);
    value.to_string().parse().unwrap_or(0.0)
}

fn classify_batch_json(
    batch_json: &str,
    as_of: Option<&str>,
    near_expiry_days: Option<u32>,
) -> Result<String, String> {
    let batch: StockBatch =
        serde_json::from_str(batch_json).map_err(|e| format!("Invalid batch JSON: {}", e))?;
    let as_of = parse_as_of(as_of)?;

    let classification = classifier(near_expiry_days)
        .classify_batch(&batch, as_of)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&classification).map_err(|e| e.to_string())
}

fn classify_product_json(
    batches_json: &str,
    as_of: Option<&str>,
    near_expiry_days: Option<u32>,
) -> Result<String, String> {
    let batches: Vec<StockBatch> =
        serde_json::from_str(batches_json).map_err(|e| format!("Invalid batches JSON: {}", e))?;
    let as_of = parse_as_of(as_of)?;

    let product = classifier(near_expiry_days)
        .classify_product(&batches, as_of)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&product).map_err(|e| e.to_string())
}

fn classifier(near_expiry_days: Option<u32>) -> StockClassifier {
    near_expiry_days
        .map(StockClassifier::new)
        .unwrap_or_default()
}

fn parse_as_of(as_of: Option<&str>) -> Result<NaiveDate, String> {
    match as_of {
        Some(s) => s
            .parse()
            .map_err(|e| format!("Invalid as_of date {}: {}", s, e)),
        None => Ok(today()),
    }
}

/// Today's UTC date from the browser clock
#[cfg(target_arch = "wasm32")]
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
    .unwrap_or_else(|| chrono::Utc::now().date_naive())
}

#[cfg(not(target_arch = "wasm32"))]
fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = r#"{
        "product_code": "PCM500",
        "batch_number": "B2401",
        "expiry_date": "2025-06-10",
        "current_stock": 25,
        "minimum_stock": 50,
        "mrp": "30.00",
        "ptr": "24.00",
        "pts": "21.50",
        "tax_rate": "12"
    }"#;

    #[test]
    fn test_classify_stock_batch() {
        let json = classify_stock_batch(BATCH, Some("2024-01-20".to_string()), None).unwrap();
        let result: BatchClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(result.status, StockStatus::Critical);
        assert_eq!(result.trend, StockTrend::Critical);
    }

    #[test]
    fn test_classify_with_custom_window() {
        // 2025-06-10 is 142 days after 2025-01-19
        let json =
            classify_stock_batch(BATCH, Some("2025-01-19".to_string()), Some(180)).unwrap();
        let result: BatchClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(result.status, StockStatus::NearExpiry);
        assert_eq!(result.days_to_expiry, 142);
    }

    #[test]
    fn test_classify_stock_product() {
        let batches = format!("[{}, {}]", BATCH, BATCH);
        let json = classify_stock_product(&batches, Some("2024-01-20".to_string()), None).unwrap();
        let product: ProductClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(product.total_current_stock, 50);
        assert_eq!(product.total_minimum_stock, 100);
        assert_eq!(product.overall_status, StockStatus::Critical);
    }

    #[test]
    fn test_classify_errors() {
        assert!(classify_batch_json("not json", None, None).is_err());
        assert!(classify_batch_json(BATCH, Some("20-01-2024"), None).is_err());
        assert_eq!(
            classify_product_json("[]", Some("2024-01-20"), None),
            Err("Product has no stock batches".to_string())
        );

        let missing_expiry = BATCH.replace("\"2025-06-10\"", "null");
        let err = classify_batch_json(&missing_expiry, Some("2024-01-20"), None).unwrap_err();
        assert!(err.contains("expiry date is missing"));
    }

    #[test]
    fn test_trend_and_status_labels() {
        assert_eq!(classify_stock_trend(151, 100), "Good");
        assert_eq!(classify_stock_trend(150, 100), "Normal");
        assert_eq!(classify_stock_trend(0, 0), "Critical");
        assert_eq!(classify_quantity_status(100, 100), "Low Stock");
        assert_eq!(classify_quantity_status(50, 100), "Critical");
        assert_eq!(classify_quantity_status(101, 100), "In Stock");
    }

    #[test]
    fn test_stock_percentage() {
        assert_eq!(calculate_stock_percentage(25, 50), Some(50.0));
        assert_eq!(calculate_stock_percentage(150, 100), Some(150.0));
        assert_eq!(calculate_stock_percentage(5, 0), None);
    }

    #[test]
    fn test_net_value() {
        let value = calculate_net_value(10, 25.5, 12.0);
        assert!((value - 285.6).abs() < 0.001);
    }
}
