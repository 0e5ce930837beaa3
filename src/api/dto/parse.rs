//! Parsing of raw form values into typed fields.

use crate::error::AppError;

/// Parses a price such as `"3.50"`.
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::invalid_field("price", format!("'{raw}' is not a number")))
}

/// Parses a bakery reference such as `"1"`.
pub fn parse_bakery_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_field("bakery_id", format!("'{raw}' is not an integer")))
}
