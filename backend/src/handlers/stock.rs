//! Stateless classification endpoints used by both portals

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    validate_batch_dates, validate_price_tiers, validate_stock_quantity, validate_tax_rate,
    BatchClassification, ProductClassification, StockBatch,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_as_of;
use crate::AppState;

/// Input for classifying one batch
#[derive(Debug, Deserialize)]
pub struct ClassifyBatchInput {
    pub batch: StockBatch,
    pub as_of: Option<NaiveDate>,
}

/// Input for classifying all batches of one product
#[derive(Debug, Deserialize)]
pub struct ClassifyProductInput {
    pub batches: Vec<StockBatch>,
    pub as_of: Option<NaiveDate>,
}

/// Classify a single batch
pub async fn classify_batch(
    State(state): State<AppState>,
    Json(input): Json<ClassifyBatchInput>,
) -> AppResult<Json<BatchClassification>> {
    validate_batch(&input.batch)?;

    let classification = state
        .classifier
        .classify_batch(&input.batch, resolve_as_of(input.as_of))?;
    Ok(Json(classification))
}

/// Roll up the batches of one product
pub async fn classify_product(
    State(state): State<AppState>,
    Json(input): Json<ClassifyProductInput>,
) -> AppResult<Json<ProductClassification>> {
    for batch in &input.batches {
        validate_batch(batch)?;
    }

    let product = state
        .classifier
        .classify_product(&input.batches, resolve_as_of(input.as_of))?;
    Ok(Json(product))
}

/// Reject malformed batches before they reach the classifier
fn validate_batch(batch: &StockBatch) -> AppResult<()> {
    validate_stock_quantity(batch.current_stock).map_err(|msg| AppError::Validation {
        field: "current_stock".to_string(),
        message: msg.to_string(),
        message_hi: "वर्तमान स्टॉक ऋणात्मक नहीं हो सकता".to_string(),
    })?;
    validate_stock_quantity(batch.minimum_stock).map_err(|msg| AppError::Validation {
        field: "minimum_stock".to_string(),
        message: msg.to_string(),
        message_hi: "न्यूनतम स्टॉक ऋणात्मक नहीं हो सकता".to_string(),
    })?;

    batch.validate()?;

    validate_batch_dates(batch.manufacturing_date, batch.expiry_date).map_err(|msg| {
        AppError::Validation {
            field: "expiry_date".to_string(),
            message: msg.to_string(),
            message_hi: "समाप्ति तिथि अमान्य है".to_string(),
        }
    })?;
    validate_tax_rate(batch.tax_rate).map_err(|msg| AppError::Validation {
        field: "tax_rate".to_string(),
        message: msg.to_string(),
        message_hi: "कर दर 0 से 100% के बीच होनी चाहिए".to_string(),
    })?;
    validate_price_tiers(batch.mrp, batch.ptr, batch.pts).map_err(|msg| AppError::Validation {
        field: "ptr".to_string(),
        message: msg.to_string(),
        message_hi: "मूल्य स्तर अमान्य हैं".to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_support::test_app;

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn batch(current: i64, minimum: i64, expiry: &str) -> Value {
        json!({
            "product_code": "PCM500",
            "batch_number": "B2401",
            "expiry_date": expiry,
            "current_stock": current,
            "minimum_stock": minimum,
            "mrp": "30.00",
            "ptr": "24.00",
            "pts": "21.50",
            "tax_rate": "12"
        })
    }

    #[tokio::test]
    async fn test_classify_batch_endpoint() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify",
            json!({ "batch": batch(25, 50, "2025-06-10"), "as_of": "2024-01-20" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "critical");
        assert_eq!(body["trend"], "critical");
    }

    #[tokio::test]
    async fn test_classify_batch_near_expiry() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify",
            json!({ "batch": batch(150, 100, "2024-03-15"), "as_of": "2024-01-05" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "near_expiry");
        assert_eq!(body["days_to_expiry"], 70);
    }

    #[tokio::test]
    async fn test_classify_batch_rejects_negative_stock() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify",
            json!({ "batch": batch(-1, 50, "2025-06-10"), "as_of": "2024-01-20" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "current_stock");
        assert_eq!(body["error"]["message_en"], "Stock quantity cannot be negative");
    }

    #[tokio::test]
    async fn test_classify_product_rejects_negative_minimum() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify-product",
            json!({
                "batches": [batch(10, 5, "2027-01-01"), batch(10, -5, "2027-01-01")],
                "as_of": "2024-01-01"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "minimum_stock");
        assert_eq!(body["error"]["message_en"], "Stock quantity cannot be negative");
    }

    #[tokio::test]
    async fn test_classify_batch_rejects_missing_expiry() {
        let mut input = batch(10, 5, "2025-06-10");
        input["expiry_date"] = Value::Null;

        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify",
            json!({ "batch": input }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "expiry_date");
    }

    #[tokio::test]
    async fn test_classify_product_endpoint() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify-product",
            json!({
                "batches": [batch(10, 5, "2027-01-01"), batch(20, 10, "2023-01-01")],
                "as_of": "2024-01-01"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_current_stock"], 30);
        assert_eq!(body["total_minimum_stock"], 15);
        assert_eq!(body["overall_status"], "expired");
        assert_eq!(body["overall_trend"], "good");
    }

    #[tokio::test]
    async fn test_classify_product_rejects_empty() {
        let (status, body) = post_json(
            test_app(),
            "/api/v1/stock/classify-product",
            json!({ "batches": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EMPTY_PRODUCT");
    }
}
