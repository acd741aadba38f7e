//! Validation utilities for stock batch entry
//!
//! These run at the request boundary, before classification, so that bad
//! rows are rejected rather than silently given a default status.

use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Quantity Validations
// ============================================================================

/// Validate a stock quantity (current or minimum) is not negative
pub fn validate_stock_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Stock quantity cannot be negative");
    }
    Ok(())
}

// ============================================================================
// Date Validations
// ============================================================================

/// Validate expiry is present and not before the manufacturing date
pub fn validate_batch_dates(
    manufacturing_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
) -> Result<(), &'static str> {
    let expiry = expiry_date.ok_or("Expiry date is required")?;
    if let Some(manufactured) = manufacturing_date {
        if manufactured > expiry {
            return Err("Manufacturing date cannot be after expiry date");
        }
    }
    Ok(())
}

// ============================================================================
// Pricing Validations
// ============================================================================

/// Validate GST percentage is between 0 and 100
pub fn validate_tax_rate(tax_rate: Decimal) -> Result<(), &'static str> {
    if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE_HUNDRED {
        return Err("Tax rate must be between 0 and 100%");
    }
    Ok(())
}

/// Validate trade price tiers: none negative and PTS <= PTR <= MRP
pub fn validate_price_tiers(mrp: Decimal, ptr: Decimal, pts: Decimal) -> Result<(), &'static str> {
    if mrp < Decimal::ZERO || ptr < Decimal::ZERO || pts < Decimal::ZERO {
        return Err("Prices cannot be negative");
    }
    if ptr > mrp {
        return Err("PTR cannot exceed MRP");
    }
    if pts > ptr {
        return Err("PTS cannot exceed PTR");
    }
    Ok(())
}
